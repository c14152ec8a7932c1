//! Root greeting endpoint.

use common::GREETING;

/// GET /: plain-text liveness greeting.
pub async fn greet() -> &'static str {
    GREETING
}
