//! Error types for request helpers.

use std::io;
use thiserror::Error;

/// Result type for request helpers.
pub type HttpResult<T> = Result<T, HttpError>;

/// Errors that can occur in request helpers.
#[derive(Debug, Error)]
pub enum HttpError {
    /// No template is registered under this key.
    #[error("unknown template: {key}")]
    UnknownTemplate {
        /// The unresolved key.
        key: String,
    },

    /// The request body was missing or not the expected JSON shape.
    #[error("bad request: {message}")]
    BadRequest {
        /// Description of the violation.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HttpError {
    /// Creates an unknown-template error.
    pub fn unknown_template(key: impl Into<String>) -> Self {
        Self::UnknownTemplate { key: key.into() }
    }

    /// Creates a bad-request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
}
