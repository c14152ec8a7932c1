//! Handler for requests that match no registered path.

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Any unmatched path: 404 with a JSON error body.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    metrics::counter!("http_requests_unmatched_total").increment(1);
    tracing::debug!(%method, %uri, "no route matched");
    ApiError::NotFound(format!("No route for {method} {}", uri.path()))
}
