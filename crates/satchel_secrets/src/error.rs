//! Error types for secret and nonce operations.

use thiserror::Error;

/// Result type for secrets operations.
pub type SecretsResult<T> = Result<T, SecretsError>;

/// Errors that can occur in secret and nonce operations.
#[derive(Debug, Error)]
pub enum SecretsError {
    /// No nonce has been issued for this action, or it was already consumed.
    #[error("no active nonce for action: {action}")]
    UnknownNonce {
        /// The action the caller tried to verify.
        action: String,
    },

    /// The presented token does not match the issued nonce.
    #[error("nonce verification failed for action: {action}")]
    NonceMismatch {
        /// The action the caller tried to verify.
        action: String,
    },

    /// The nonce outlived its expiration window.
    #[error("nonce expired for action: {action}")]
    NonceExpired {
        /// The action the caller tried to verify.
        action: String,
    },

    /// A generation parameter was out of range.
    #[error("invalid length: {message}")]
    InvalidLength {
        /// Description of the violation.
        message: String,
    },
}

impl SecretsError {
    /// Creates an unknown-nonce error.
    pub fn unknown_nonce(action: impl Into<String>) -> Self {
        Self::UnknownNonce {
            action: action.into(),
        }
    }

    /// Creates a nonce-mismatch error.
    pub fn nonce_mismatch(action: impl Into<String>) -> Self {
        Self::NonceMismatch {
            action: action.into(),
        }
    }

    /// Creates a nonce-expired error.
    pub fn nonce_expired(action: impl Into<String>) -> Self {
        Self::NonceExpired {
            action: action.into(),
        }
    }

    /// Creates an invalid-length error.
    pub fn invalid_length(message: impl Into<String>) -> Self {
        Self::InvalidLength {
            message: message.into(),
        }
    }
}
