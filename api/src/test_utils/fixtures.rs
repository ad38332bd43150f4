//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{ContactFields, ContactSubmission, RepositorySummary};

/// Create a showcase repository with no description, language or topics
pub fn test_repo(name: &str) -> RepositorySummary {
    RepositorySummary {
        name: name.to_string(),
        description: None,
        language: None,
        topics: Vec::new(),
        html_url: format!("https://github.com/octo/{}", name),
        homepage: None,
        fork: false,
        archived: false,
    }
}

/// Create a repository with a description
pub fn test_repo_described(name: &str, description: &str) -> RepositorySummary {
    RepositorySummary {
        description: Some(description.to_string()),
        ..test_repo(name)
    }
}

/// Create a valid submission
pub fn test_submission() -> ContactSubmission {
    ContactSubmission {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        subject: "Project inquiry".to_string(),
        message: "Would you like to collaborate?".to_string(),
    }
}

/// Raw form fields for `test_submission`
pub fn test_contact_fields() -> ContactFields {
    let s = test_submission();
    ContactFields {
        name: Some(s.name),
        email: Some(s.email),
        subject: Some(s.subject),
        message: Some(s.message),
    }
}
