//! Contact relay handler
//!
//! Forwards contact-form submissions to the mailing repository's issue tracker.
//! Both accepted body shapes get the same response shape.

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::entities::ContactRequest;
use crate::domain::ports::HostingClient;
use crate::error::AppError;
use crate::AppState;

pub const SUBMITTED_MESSAGE: &str = "Contact form submitted successfully";

/// Successful relay response
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    pub issue_url: String,
}

/// ANY /contact
///
/// OPTIONS answers the preflight, POST relays, everything else is 405.
pub async fn contact<HC: HostingClient + 'static>(
    State(state): State<AppState<HC>>,
    method: Method,
    body: Bytes,
) -> Result<Response, AppError> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    let request: ContactRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::InvalidBody(e.to_string()))?;

    let created = state.contact_service.submit(request).await?;

    Ok(Json(ContactResponse {
        success: true,
        message: SUBMITTED_MESSAGE.to_string(),
        issue_url: created.html_url,
    })
    .into_response())
}
