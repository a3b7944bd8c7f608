//! Error types for the API gateway.

use thiserror::Error;

/// Errors that can occur when calling the GreenMind API.
///
/// Every failure carries a human-readable message; the controllers surface
/// `Display` output directly to the user.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP request could not be performed (connection, timeout, TLS).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    ///
    /// The message is taken from the response body's `message` or `error`
    /// field when the body is JSON, otherwise derived from the status.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Human-readable error message.
        message: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// The HTTP status for server-reported errors, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

/// Error body shape used by the backend.
///
/// The backend is inconsistent between `{"message": ...}` and
/// `{"error": ...}`; both are accepted.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
}
