//! Centralized error types for VenueDesk.

use thiserror::Error;

/// Main error type for VenueDesk operations.
#[derive(Error, Debug)]
pub enum VenueError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid {kind} status: '{value}'")]
    InvalidStatus { kind: &'static str, value: String },

    #[error("Invalid property type: '{0}'")]
    InvalidPropertyType(String),

    #[error("Invalid date '{0}': expected DDMMYYYY")]
    InvalidDate(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for VenueDesk operations.
pub type VenueResult<T> = Result<T, VenueError>;

impl VenueError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid status error for the given entity kind.
    pub fn invalid_status(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidStatus {
            kind,
            value: value.into(),
        }
    }
}
