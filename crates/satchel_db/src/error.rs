//! Error types for database operations.

use std::io;
use thiserror::Error;

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

/// Errors that can occur in database operations.
#[derive(Debug, Error)]
pub enum DbError {
    /// Credential string or connection option was invalid.
    ///
    /// Raised before any driver handle is opened.
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the violation.
        message: String,
    },

    /// The DSN named a driver this build does not provide.
    #[error("unknown driver: {name}")]
    UnknownDriver {
        /// The rejected driver name.
        name: String,
    },

    /// Placeholder count does not match the parameter count.
    ///
    /// Raised before any execution is attempted.
    #[error("placeholder count mismatch: query has {expected} placeholders, {actual} parameters given")]
    PlaceholderMismatch {
        /// Placeholders found in the normalized query.
        expected: usize,
        /// Parameters supplied by the caller.
        actual: usize,
    },

    /// A typed placeholder could not coerce its parameter.
    #[error("cannot coerce parameter {index} to {target}")]
    Coercion {
        /// Zero-based parameter index.
        index: usize,
        /// The coercion target type.
        target: &'static str,
    },

    /// The native driver reported an error.
    #[error("driver error: {message}")]
    Driver {
        /// The driver's message.
        message: String,
    },

    /// Operation not permitted in the current state.
    #[error("invalid operation: {message}")]
    InvalidOperation {
        /// Description of why the operation is invalid.
        message: String,
    },

    /// Table builder validation failed.
    #[error("table builder error: {message}")]
    Builder {
        /// Description of the violation.
        message: String,
    },

    /// Backup or restore failed.
    #[error("backup error: {message}")]
    Backup {
        /// Description of the failure.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DbError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates an unknown-driver error.
    pub fn unknown_driver(name: impl Into<String>) -> Self {
        Self::UnknownDriver { name: name.into() }
    }

    /// Creates a driver error.
    pub fn driver(message: impl Into<String>) -> Self {
        Self::Driver {
            message: message.into(),
        }
    }

    /// Creates an invalid-operation error.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }

    /// Creates a table builder error.
    pub fn builder(message: impl Into<String>) -> Self {
        Self::Builder {
            message: message.into(),
        }
    }

    /// Creates a backup error.
    pub fn backup(message: impl Into<String>) -> Self {
        Self::Backup {
            message: message.into(),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Driver {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "duckdb")]
impl From<duckdb::Error> for DbError {
    fn from(err: duckdb::Error) -> Self {
        Self::Driver {
            message: err.to_string(),
        }
    }
}
