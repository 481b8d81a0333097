//! Error types for rule service calls.

use thiserror::Error;

/// Any transport or HTTP failure talking to the rule service.
///
/// Never retried; the controller turns it into a notification.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The request URL could not be built from the configured base URL
    #[error("Invalid URL for {operation}: {reason}")]
    InvalidUrl {
        operation: &'static str,
        reason: String,
    },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never got a response
    #[error("{operation} request failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status
    #[error("{operation} returned {status}: {message}")]
    Status {
        operation: &'static str,
        status: u16,
        message: String,
    },

    /// The response body was not what the operation expects
    #[error("Failed to decode {operation} response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl NetworkError {
    /// Operation that produced the error, for logging.
    pub fn operation(&self) -> &'static str {
        match self {
            NetworkError::InvalidUrl { operation, .. }
            | NetworkError::Transport { operation, .. }
            | NetworkError::Status { operation, .. }
            | NetworkError::Decode { operation, .. } => operation,
            NetworkError::Client(_) => "client",
        }
    }

    /// HTTP status, when the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            NetworkError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
