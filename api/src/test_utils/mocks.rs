//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They record calls so tests can verify behavior.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{IssueDraft, RepositorySummary};
use crate::domain::ports::{CreatedIssue, HostingClient};
use crate::error::HostingError;

type IssueCall = (String, String, IssueDraft);

// ============================================================================
// Mock Hosting Client
// ============================================================================

pub struct MockHostingClient {
    repos: Arc<RwLock<Vec<RepositorySummary>>>,
    /// Status every call fails with, if set
    fail_status: Arc<RwLock<Option<u16>>>,
    issue_url: Arc<RwLock<String>>,
    list_calls: Arc<RwLock<Vec<String>>>,
    create_calls: Arc<RwLock<usize>>,
    issues_created: Arc<RwLock<Vec<IssueCall>>>,
}

impl Default for MockHostingClient {
    fn default() -> Self {
        Self {
            repos: Arc::new(RwLock::new(Vec::new())),
            fail_status: Arc::new(RwLock::new(None)),
            issue_url: Arc::new(RwLock::new(
                "https://github.com/octo/PrivateMailing/issues/1".to_string(),
            )),
            list_calls: Arc::new(RwLock::new(Vec::new())),
            create_calls: Arc::new(RwLock::new(0)),
            issues_created: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl MockHostingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repositories returned by the listing call, in order
    pub fn with_repos(self, repos: Vec<RepositorySummary>) -> Self {
        *self.repos.write().unwrap() = repos;
        self
    }

    pub fn with_issue_url(self, url: &str) -> Self {
        *self.issue_url.write().unwrap() = url.to_string();
        self
    }

    /// Make every call fail with the given upstream status
    pub fn failing_with(self, status: u16) -> Self {
        *self.fail_status.write().unwrap() = Some(status);
        self
    }

    pub fn list_calls(&self) -> Vec<String> {
        self.list_calls.read().unwrap().clone()
    }

    /// Number of create_issue attempts, successful or not
    pub fn create_issue_calls(&self) -> usize {
        *self.create_calls.read().unwrap()
    }

    pub fn issues_created(&self) -> Vec<IssueCall> {
        self.issues_created.read().unwrap().clone()
    }

    fn failure(&self) -> Option<HostingError> {
        self.fail_status.read().unwrap().map(|status| HostingError::Api {
            status,
            message: "Mock failure".to_string(),
        })
    }
}

#[async_trait]
impl HostingClient for MockHostingClient {
    async fn list_user_repos(&self, owner: &str) -> Result<Vec<RepositorySummary>, HostingError> {
        self.list_calls.write().unwrap().push(owner.to_string());

        if let Some(err) = self.failure() {
            return Err(err);
        }

        Ok(self.repos.read().unwrap().clone())
    }

    async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        issue: &IssueDraft,
    ) -> Result<CreatedIssue, HostingError> {
        *self.create_calls.write().unwrap() += 1;

        if let Some(err) = self.failure() {
            return Err(err);
        }

        let mut created = self.issues_created.write().unwrap();
        created.push((owner.to_string(), repo.to_string(), issue.clone()));

        Ok(CreatedIssue {
            number: created.len() as i64,
            html_url: self.issue_url.read().unwrap().clone(),
        })
    }
}
