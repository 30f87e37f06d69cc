//! Error types for file and archive operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for file and archive operations.
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Errors that can occur in file and archive operations.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// ZIP format error.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The named file does not exist.
    #[error("file not found: {path}")]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The file's extension is not on the allow-list.
    #[error("file type not allowed: .{extension}")]
    DisallowedType {
        /// The rejected extension.
        extension: String,
    },

    /// The file exceeds the configured size limit.
    #[error("file too large: {size} bytes exceeds limit of {limit}")]
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: u64,
    },

    /// A path escaped the managed base directory or was otherwise malformed.
    #[error("invalid path: {message}")]
    InvalidPath {
        /// Description of the violation.
        message: String,
    },

    /// The archive format is not one this crate reads.
    #[error("unsupported archive: {message}")]
    UnsupportedArchive {
        /// Description of the format issue.
        message: String,
    },
}

impl ArchiveError {
    /// Creates a not-found error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates a disallowed-type error.
    pub fn disallowed_type(extension: impl Into<String>) -> Self {
        Self::DisallowedType {
            extension: extension.into(),
        }
    }

    /// Creates an invalid-path error.
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::InvalidPath {
            message: message.into(),
        }
    }

    /// Creates an unsupported-archive error.
    pub fn unsupported_archive(message: impl Into<String>) -> Self {
        Self::UnsupportedArchive {
            message: message.into(),
        }
    }
}
