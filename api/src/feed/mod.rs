//! Feed module
//!
//! HTML rendering of the project feed.

pub mod renderer;

pub use renderer::{render_feed, render_feed_html, ProjectContainer};
