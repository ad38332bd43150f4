//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod hosting;

pub use hosting::{CreatedIssue, HostingClient, REPOS_PER_PAGE};
