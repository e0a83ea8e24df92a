//! Error types for the batch's external data sources.
//!
//! Every transport, status, and decode failure from a collaborator
//! collapses into [`SourceError`]; whether that is fatal or merely
//! skips a game is decided by the engine, not here.

use thiserror::Error;

/// Errors raised while fetching from an external source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network-level failure (connect, timeout, body read).
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP response.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message or body excerpt from the API.
        message: String,
    },

    /// Response body did not decode into the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// The rate endpoint returned a value that is not a decimal number.
    #[error("malformed rate value: {0:?}")]
    MalformedRate(String),
}

impl SourceError {
    /// Creates an API error from status code and message.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if err.is_timeout() {
            Self::Network(format!("request timeout: {err}"))
        } else if err.is_connect() {
            Self::Network(format!("connection failed: {err}"))
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Result type alias for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;
