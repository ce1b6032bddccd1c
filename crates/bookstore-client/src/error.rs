//! Gateway error types

use thiserror::Error;

/// Failure modes of the remote store gateway.
///
/// `Validation` carries the service's own message (its error bodies are
/// `{"error": "..."}`); callers surface that text directly. Everything else
/// renders a short description suitable for a transient notification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Transport failure before a response arrived, or an unreadable body.
    #[error("Network error: {message}")]
    Network { message: String },
    /// Non-success status without a parseable error body.
    #[error("Server error (status {status})")]
    Server { status: u16 },
    /// The service rejected the request and said why.
    #[error("{message}")]
    Validation { message: String },
    /// The targeted record is unknown to the service.
    #[error("Book not found")]
    NotFound,
    /// The configured base address is not a valid URL.
    #[error("Invalid base address: {url}")]
    InvalidUrl { url: String },
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Network {
            message: e.to_string(),
        }
    }
}
