//! Hosting provider port trait
//!
//! Defines the interface for the code-hosting API (GitHub) the service talks to.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{IssueDraft, RepositorySummary};
use crate::error::HostingError;

/// Repositories requested per listing call; pagination is not followed
pub const REPOS_PER_PAGE: usize = 100;

/// Issue created by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedIssue {
    #[serde(default)]
    pub number: i64,
    pub html_url: String,
}

/// Port trait for hosting provider operations
#[async_trait]
pub trait HostingClient: Send + Sync {
    /// List an owner's public repositories, most recently updated first.
    ///
    /// Only the first page (100 entries) is fetched.
    async fn list_user_repos(&self, owner: &str) -> Result<Vec<RepositorySummary>, HostingError>;

    /// Open an issue in `owner/repo`
    async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        issue: &IssueDraft,
    ) -> Result<CreatedIssue, HostingError>;
}
