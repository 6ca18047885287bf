//! The failure taxonomy for API calls.

use reqwest::StatusCode;
use serde::Deserialize;

/// Error produced by any call against the college API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure: connect, timeout, interrupted body.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status. Carries the `message`
    /// field of the error body when the backend supplied one.
    #[error("server returned {status}")]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    /// A success status whose body did not match the expected shape.
    #[error("invalid response from server: {0}")]
    InvalidResponse(String),
}

/// Error body shape the backend uses for rejections.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}

impl ApiError {
    /// The server-supplied rejection message, if there is one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Whether this is a rejection with the given status.
    #[must_use]
    pub fn is_status(&self, expected: StatusCode) -> bool {
        matches!(self, ApiError::Status { status, .. } if *status == expected)
    }
}
