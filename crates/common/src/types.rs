use serde::{Deserialize, Serialize};

/// Plain-text body served at the root path.
pub const GREETING: &str = "Hello! Backend is running!";

/// Outcome tag reported by a healthy service.
pub const STATUS_SUCCESS: &str = "success";

/// Human-readable message paired with [`STATUS_SUCCESS`].
pub const STATUS_MESSAGE: &str = "Backend is working!";

/// Health-check response body.
///
/// Serialized keys follow declaration order: `status` first, then `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Short machine-readable outcome tag.
    pub status: String,
    /// Human-readable description.
    pub message: String,
}

impl Status {
    /// Creates a status with an arbitrary outcome tag and message.
    pub fn new(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            message: message.into(),
        }
    }

    /// The fixed payload returned while the backend is up.
    pub fn success() -> Self {
        Self::new(STATUS_SUCCESS, STATUS_MESSAGE)
    }
}
