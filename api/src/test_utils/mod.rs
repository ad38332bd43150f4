//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
