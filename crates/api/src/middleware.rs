//! Per-request Prometheus instrumentation.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;

/// Path label for requests that reach the layer without a matched route.
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Method label for any method outside the standard set.
pub const OTHER_METHOD: &str = "OTHER";

/// Records `http_requests_total` and `http_request_duration_seconds`,
/// labelled by method, route template and response status.
///
/// Installed with `route_layer`, so only matched routes pass through here.
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let path = route_label(req.extensions().get::<MatchedPath>().map(MatchedPath::as_str));
    let method = method_label(req.method());

    let response = next.run(req).await;

    let elapsed = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    metrics::counter!(
        "http_requests_total",
        "method" => method,
        "path" => path.clone(),
        "status" => status.clone()
    )
    .increment(1);
    metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => path,
        "status" => status
    )
    .record(elapsed);

    response
}

/// Route template label. Raw request paths never become label values.
pub fn route_label(matched: Option<&str>) -> String {
    matched.unwrap_or(UNMATCHED_ROUTE).to_owned()
}

/// Method label, folding extension methods into [`OTHER_METHOD`].
pub fn method_label(method: &Method) -> &'static str {
    match *method {
        Method::GET => "GET",
        Method::HEAD => "HEAD",
        Method::POST => "POST",
        Method::PUT => "PUT",
        Method::DELETE => "DELETE",
        Method::PATCH => "PATCH",
        Method::OPTIONS => "OPTIONS",
        Method::CONNECT => "CONNECT",
        Method::TRACE => "TRACE",
        _ => OTHER_METHOD,
    }
}
