//! Contact submission entity
//!
//! A contact-form submission arrives in one of two shapes and is turned into
//! an issue draft for the mailing repository.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

pub const MISSING_FIELDS: &str = "Missing required fields";

/// Subject characters kept in the issue title
pub const TITLE_SUBJECT_LIMIT: usize = 50;

pub const CONTACT_LABELS: [&str; 2] = ["contact-form", "portfolio"];

/// Raw form fields; any of them may be absent until validated
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Accepted request bodies for the contact endpoint.
///
/// `Dispatch` is the webhook-style envelope (`event_type` + `client_payload`);
/// `Direct` is the plain form post. Both are answered identically.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContactRequest {
    Dispatch {
        event_type: String,
        client_payload: ContactFields,
    },
    Direct(ContactFields),
}

impl ContactRequest {
    /// Check that all four fields are present and non-blank
    pub fn validate(self) -> Result<ContactSubmission, DomainError> {
        let fields = match self {
            ContactRequest::Dispatch { client_payload, .. } => client_payload,
            ContactRequest::Direct(fields) => fields,
        };

        let required = |v: Option<String>| {
            v.filter(|s| !s.trim().is_empty())
                .ok_or_else(|| DomainError::Validation(MISSING_FIELDS.to_string()))
        };

        Ok(ContactSubmission {
            name: required(fields.name)?,
            email: required(fields.email)?,
            subject: required(fields.subject)?,
            message: required(fields.message)?,
        })
    }
}

/// A validated contact submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Issue to open in the mailing repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueDraft {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

impl ContactSubmission {
    /// Issue title: the subject cut to 50 characters, with an ellipsis when cut
    pub fn issue_title(&self) -> String {
        let mut title = String::from("Contact: ");
        title.extend(self.subject.chars().take(TITLE_SUBJECT_LIMIT));
        if self.subject.chars().count() > TITLE_SUBJECT_LIMIT {
            title.push_str("...");
        }
        title
    }

    pub fn to_issue(&self, received_at: DateTime<Utc>) -> IssueDraft {
        let body = format!(
            "**New Contact Form Submission** 📧\n\
             \n\
             **From:** {name}  \n\
             **Email:** {email}  \n\
             **Subject:** {subject}  \n\
             **Timestamp:** {timestamp}\n\
             \n\
             **Message:**\n\
             {message}\n\
             \n\
             ---\n\
             *Automatically generated from portfolio contact form*",
            name = self.name,
            email = self.email,
            subject = self.subject,
            timestamp = received_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            message = self.message,
        );

        IssueDraft {
            title: self.issue_title(),
            body,
            labels: CONTACT_LABELS.iter().map(|l| l.to_string()).collect(),
        }
    }
}
