//! GitHub API client implementation

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;
use urlencoding::encode;

use crate::domain::entities::{IssueDraft, RepositorySummary};
use crate::domain::ports::{CreatedIssue, HostingClient, REPOS_PER_PAGE};
use crate::error::HostingError;

const ACCEPT_V3: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("portfolio-api/", env!("CARGO_PKG_VERSION"));

/// Implementation of the GitHub API client
pub struct GitHubClient {
    http: Client,
    base_url: String,
    token: String,
}

impl GitHubClient {
    pub fn new(base_url: String, token: String) -> Result<Self, HostingError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, HostingError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| HostingError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(HostingError::Unauthorized)
        } else {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "GitHub API error: {}", message);
            Err(HostingError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl HostingClient for GitHubClient {
    async fn list_user_repos(&self, owner: &str) -> Result<Vec<RepositorySummary>, HostingError> {
        let url = self.api_url(&format!(
            "/users/{}/repos?sort=updated&per_page={}",
            encode(owner),
            REPOS_PER_PAGE
        ));

        let response = self
            .http
            .get(&url)
            .header(header::ACCEPT, ACCEPT_V3)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        issue: &IssueDraft,
    ) -> Result<CreatedIssue, HostingError> {
        let url = self.api_url(&format!("/repos/{}/{}/issues", encode(owner), encode(repo)));

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .header(header::ACCEPT, ACCEPT_V3)
            .json(issue)
            .send()
            .await?;

        self.handle_response(response).await
    }
}
