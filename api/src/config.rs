use std::env;

use crate::error::ConfigError;

const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_MAILING_REPO: &str = "PrivateMailing";

#[derive(Debug, Clone)]
pub struct Config {
    /// Owner whose public repositories feed the project list and who owns the mailing repo
    pub github_username: String,
    /// Token used to open issues in the mailing repo
    pub github_token: String,
    pub github_api_url: String,
    /// Private repository that receives contact-form issues
    pub mailing_repo: String,
    pub port: u16,
    /// Sustained contact submissions per second, per client IP
    pub contact_rate_per_second: u64,
    pub contact_rate_burst: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let config = Self {
            github_username: get("GITHUB_USERNAME").ok_or(ConfigError::Missing("GITHUB_USERNAME"))?,
            github_token: get("GITHUB_PAT").ok_or(ConfigError::Missing("GITHUB_PAT"))?,
            github_api_url: get("GITHUB_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            mailing_repo: get("MAILING_REPO").unwrap_or_else(|| DEFAULT_MAILING_REPO.to_string()),
            port: parse_or("PORT", get("PORT"), 8080)?,
            contact_rate_per_second: parse_or(
                "CONTACT_RATE_PER_SECOND",
                get("CONTACT_RATE_PER_SECOND"),
                2,
            )?,
            contact_rate_burst: parse_or("CONTACT_RATE_BURST", get("CONTACT_RATE_BURST"), 5)?,
        };

        if config.contact_rate_per_second == 0 {
            return Err(ConfigError::Invalid {
                name: "CONTACT_RATE_PER_SECOND",
                value: "0".to_string(),
            });
        }
        if config.contact_rate_burst == 0 {
            return Err(ConfigError::Invalid {
                name: "CONTACT_RATE_BURST",
                value: "0".to_string(),
            });
        }

        Ok(config)
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
    }
}
