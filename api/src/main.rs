//! Portfolio API Server
//!
//! Backend for a static portfolio site: renders project cards from the owner's
//! public GitHub repositories and relays contact-form submissions into a
//! private repository's issue tracker.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::{header, Method},
    routing::{any, get},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::GitHubClient;
use app::{ContactService, ProjectFeedService};
use config::Config;
use domain::ports::HostingClient;

/// Application state shared across all handlers
pub struct AppState<HC: HostingClient = GitHubClient> {
    pub feed_service: Arc<ProjectFeedService<HC>>,
    pub contact_service: Arc<ContactService<HC>>,
}

// Manual impl: derive would demand `HC: Clone`
impl<HC: HostingClient> Clone for AppState<HC> {
    fn clone(&self) -> Self {
        Self {
            feed_service: self.feed_service.clone(),
            contact_service: self.contact_service.clone(),
        }
    }
}

impl<HC: HostingClient> AppState<HC> {
    pub fn new(hosting: Arc<HC>, config: &Config) -> Self {
        Self {
            feed_service: Arc::new(ProjectFeedService::new(
                hosting.clone(),
                config.github_username.clone(),
            )),
            contact_service: Arc::new(ContactService::new(
                hosting,
                config.github_username.clone(),
                config.mailing_repo.clone(),
            )),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// The contact route on its own, so callers can layer rate limiting onto it
pub fn contact_routes<HC: HostingClient + 'static>() -> Router<AppState<HC>> {
    Router::new().route("/contact", any(handlers::contact::<HC>))
}

/// Contact routes behind a per-peer-IP limiter allowing `per_second` sustained
/// requests with bursts of up to `burst`
pub fn rate_limited_contact_routes<HC: HostingClient + 'static>(
    per_second: u64,
    burst: u32,
) -> anyhow::Result<Router<AppState<HC>>> {
    anyhow::ensure!(per_second > 0, "contact rate must be at least 1 per second");

    // The governor takes the interval between token refills, not a rate
    let refill_ms = (1000 / per_second).max(1);
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_millisecond(refill_ms)
            .burst_size(burst)
            .finish()
            .context("Failed to build governor config")?,
    );

    Ok(contact_routes().layer(GovernorLayer {
        config: governor_config,
    }))
}

/// Full application router. Every response, errors included, allows any origin.
pub fn build_router<HC: HostingClient + 'static>(
    state: AppState<HC>,
    contact: Router<AppState<HC>>,
) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/projects", get(handlers::get_projects::<HC>))
        .route("/projects/cards", get(handlers::get_project_cards::<HC>))
        .merge(contact)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,portfolio_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Portfolio API...");

    // Load configuration
    let config = Config::from_env().context("Invalid configuration")?;
    tracing::info!(
        owner = %config.github_username,
        mailing_repo = %config.mailing_repo,
        "Configuration loaded"
    );

    let github = Arc::new(
        GitHubClient::new(config.github_api_url.clone(), config.github_token.clone())
            .context("Failed to build GitHub client")?,
    );

    let state = AppState::new(github, &config);

    let contact = rate_limited_contact_routes::<GitHubClient>(
        config.contact_rate_per_second,
        config.contact_rate_burst,
    )?;

    let app = build_router(state, contact);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
