//! Status endpoint.

use axum::http::header;
use axum::response::{IntoResponse, Response};
use common::Status;

use crate::error::ApiError;

/// GET /api/status: returns the fixed success payload.
///
/// The body is serialized explicitly so key order always matches the
/// field order of [`Status`].
#[tracing::instrument]
pub async fn get() -> Result<Response, ApiError> {
    let body = serde_json::to_string(&Status::success())?;
    tracing::debug!(%body, "serving status");
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
