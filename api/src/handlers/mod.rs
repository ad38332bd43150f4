//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod contact;
pub mod projects;

pub use contact::contact;
pub use projects::{get_project_cards, get_projects};
