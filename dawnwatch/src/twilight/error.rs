//! Error types for twilight data access.

use thiserror::Error;

/// Errors that can occur when fetching twilight data for a coordinate.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TwilightError {
    /// HTTP request failed (transport error or non-success status).
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON deserialization failed.
    #[error("Failed to parse response: {0}")]
    Json(String),
}
