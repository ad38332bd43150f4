//! GitHub adapter
//!
//! Implementation of the hosting port against the GitHub REST API.

pub mod client;

pub use client::GitHubClient;
