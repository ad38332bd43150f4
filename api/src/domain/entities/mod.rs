//! Domain entities
//!
//! Core business objects: hosted repositories, the cards rendered from them,
//! and contact submissions bound for the issue tracker.

pub mod contact;
pub mod repository;

pub use contact::{ContactFields, ContactRequest, ContactSubmission, IssueDraft};
pub use repository::{Category, CategoryFilter, ProjectCard, RepositorySummary};
