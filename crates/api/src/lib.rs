//! HTTP server for simple-backend.
//!
//! Serves a plain-text greeting at `/` and a fixed JSON status at
//! `/api/status`, with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod telemetry;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the Axum application router.
///
/// Unmatched paths fall through to a 404 JSON error; a known path hit with
/// the wrong method gets the router's 405.
pub fn create_app(metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::root::greet))
        .route("/api/status", get(routes::status::get))
        .merge(metrics_router)
        .route_layer(axum::middleware::from_fn(middleware::track_metrics))
        .fallback(routes::fallback::not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
