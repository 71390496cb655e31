//! User-facing error taxonomy for workflow actions.
//!
//! ERROR HANDLING
//! ==============
//! Errors never propagate past the action that triggered them. The controller
//! converts each one into a status banner or a blocking notification at the
//! point of failure; `Display` is the exact text the user sees.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::net::api::ApiError;

/// Failure of a single workflow action.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorkflowError {
    /// Missing/denied authorization code or a failed token exchange.
    #[error("Auth failed: {0}")]
    Auth(String),

    /// Fetch-level failure or a body that was not JSON.
    #[error("Network error: {0}")]
    Network(String),

    /// A required field is empty or a URL is malformed. No request was made.
    #[error("{0}")]
    Validation(&'static str),

    /// The service answered without its success marker.
    #[error("{0}")]
    Rejected(String),
}

impl WorkflowError {
    /// Classify an API failure, using `fallback` when the service sent no message.
    #[must_use]
    pub fn from_api(err: ApiError, fallback: &str) -> Self {
        match err {
            ApiError::Network(detail) => Self::Network(detail),
            ApiError::Rejected(message) => Self::Rejected(message.unwrap_or_else(|| fallback.to_owned())),
        }
    }

    /// Whether this error ends the session and requires a fresh authorization.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}
