//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod contact_service;
pub mod project_feed_service;

pub use contact_service::ContactService;
pub use project_feed_service::{ProjectFeed, ProjectFeedService};
