//! Unified error types for the Portfolio API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `HostingError`: GitHub API client errors
//! - `AppError`: Application layer errors (wraps the others for HTTP responses)
//! - `ConfigError`: Startup configuration errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
}

/// Hosting provider (GitHub) API client errors
#[derive(Debug, Error)]
pub enum HostingError {
    /// The request never produced a response (DNS, TLS, connection reset...)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("GitHub API returned {status}")]
    Api { status: u16, message: String },

    #[error("GitHub API returned 401 - invalid token")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl HostingError {
    /// Upstream HTTP status, when the provider answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            HostingError::Api { status, .. } => Some(*status),
            HostingError::Unauthorized => Some(401),
            _ => None,
        }
    }
}

/// Configuration errors raised while loading settings at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Upstream error: {0}")]
    Upstream(#[from] HostingError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone(), None)
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "Bad request".to_string(),
                Some(msg.clone()),
            ),
            AppError::InvalidBody(msg) => (
                StatusCode::BAD_REQUEST,
                "Invalid request body".to_string(),
                Some(msg.clone()),
            ),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method Not Allowed".to_string(),
                None,
            ),
            AppError::Upstream(e) => {
                tracing::error!(status = ?e.status(), "GitHub error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to process contact form submission".to_string(),
                    Some(e.to_string()),
                )
            }
        };

        let body = Json(ErrorResponse { error, details });

        (status, body).into_response()
    }
}
