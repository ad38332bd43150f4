//! Contact relay service
//!
//! Validates a contact submission and files it as an issue in the owner's
//! mailing repository. One attempt per submission; failures are not retried.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::ContactRequest;
use crate::domain::ports::{CreatedIssue, HostingClient};
use crate::error::AppError;

pub struct ContactService<HC>
where
    HC: HostingClient,
{
    hosting: Arc<HC>,
    owner: String,
    mailing_repo: String,
}

impl<HC> ContactService<HC>
where
    HC: HostingClient,
{
    pub fn new(hosting: Arc<HC>, owner: String, mailing_repo: String) -> Self {
        Self {
            hosting,
            owner,
            mailing_repo,
        }
    }

    /// Validate and forward a submission. Invalid input never reaches the provider.
    pub async fn submit(&self, request: ContactRequest) -> Result<CreatedIssue, AppError> {
        if let ContactRequest::Dispatch { event_type, .. } = &request {
            tracing::debug!(event_type = %event_type, "Contact submission via dispatch envelope");
        }

        let submission = request.validate()?;
        let issue = submission.to_issue(Utc::now());

        let created = self
            .hosting
            .create_issue(&self.owner, &self.mailing_repo, &issue)
            .await?;

        tracing::info!(
            issue = created.number,
            repo = %self.mailing_repo,
            "Contact submission filed"
        );

        Ok(created)
    }
}
