//! Project feed handlers
//!
//! Serve the portfolio's project cards, either as the HTML fragment the page
//! injects or as JSON.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::ProjectFeed;
use crate::domain::entities::{CategoryFilter, ProjectCard};
use crate::domain::ports::HostingClient;
use crate::error::AppError;
use crate::feed::render_feed_html;
use crate::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for the project feed
#[derive(Debug, Default, Deserialize)]
pub struct ProjectsQuery {
    /// One of all, web, mobile, gamedev, other
    #[serde(default)]
    pub category: Option<String>,
}

impl ProjectsQuery {
    fn filter(&self) -> Result<CategoryFilter, AppError> {
        match self.category.as_deref() {
            None | Some("") => Ok(CategoryFilter::All),
            Some(raw) => raw.parse().map_err(AppError::BadRequest),
        }
    }
}

/// JSON project feed
#[derive(Debug, Serialize)]
pub struct ProjectCardsResponse {
    pub cards: Vec<ProjectCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ProjectFeed> for ProjectCardsResponse {
    fn from(feed: ProjectFeed) -> Self {
        match feed {
            ProjectFeed::Loaded(cards) => Self { cards, error: None },
            ProjectFeed::NoMatches { .. } => Self {
                cards: Vec::new(),
                error: None,
            },
            ProjectFeed::Unavailable { reason } => Self {
                cards: Vec::new(),
                error: Some(reason),
            },
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /projects
///
/// Rendered project cards. Fetch failures become an inline placeholder, not an error status.
pub async fn get_projects<HC: HostingClient + 'static>(
    State(state): State<AppState<HC>>,
    Query(query): Query<ProjectsQuery>,
) -> Result<Html<String>, AppError> {
    let filter = query.filter()?;
    let feed = state.feed_service.load(filter).await;

    Ok(Html(render_feed_html(&feed)))
}

/// GET /projects/cards
///
/// The same feed as JSON.
pub async fn get_project_cards<HC: HostingClient + 'static>(
    State(state): State<AppState<HC>>,
    Query(query): Query<ProjectsQuery>,
) -> Result<Json<ProjectCardsResponse>, AppError> {
    let filter = query.filter()?;
    let feed = state.feed_service.load(filter).await;

    Ok(Json(feed.into()))
}
