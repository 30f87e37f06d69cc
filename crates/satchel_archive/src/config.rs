//! File manager configuration.

use std::collections::HashMap;
use std::path::PathBuf;

/// Default maximum accepted file size (32 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 32 * 1024 * 1024;

/// Default streaming chunk size.
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// Built-in extension → MIME allow-list.
const DEFAULT_ALLOWED_TYPES: &[(&str, &str)] = &[
    ("csv", "text/csv"),
    ("doc", "application/msword"),
    ("docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
    ("gif", "image/gif"),
    ("gz", "application/gzip"),
    ("html", "text/html"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("json", "application/json"),
    ("md", "text/markdown"),
    ("mp3", "audio/mpeg"),
    ("mp4", "video/mp4"),
    ("pdf", "application/pdf"),
    ("png", "image/png"),
    ("svg", "image/svg+xml"),
    ("tar", "application/x-tar"),
    ("tgz", "application/gzip"),
    ("txt", "text/plain"),
    ("webp", "image/webp"),
    ("xls", "application/vnd.ms-excel"),
    ("xlsx", "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
    ("xml", "application/xml"),
    ("zip", "application/zip"),
];

/// Configuration for a [`FileManager`](crate::FileManager).
///
/// The allow-list gates uploads and renders; it is per-instance and can be
/// extended or restricted with [`allow_type`](Self::allow_type) and
/// [`deny_type`](Self::deny_type).
#[derive(Debug, Clone)]
pub struct FileManagerConfig {
    /// Directory all managed paths resolve under.
    pub base_path: PathBuf,
    /// Maximum accepted file size in bytes.
    pub max_file_size: u64,
    /// Chunk size for streamed reads.
    pub chunk_size: usize,
    /// Extension → MIME allow-list.
    pub allowed_types: HashMap<String, String>,
}

impl FileManagerConfig {
    /// Creates a configuration rooted at `base_path` with the default
    /// allow-list and limits.
    #[must_use]
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            chunk_size: DEFAULT_CHUNK_SIZE,
            allowed_types: DEFAULT_ALLOWED_TYPES
                .iter()
                .map(|&(ext, mime)| (ext.to_string(), mime.to_string()))
                .collect(),
        }
    }

    /// Sets the maximum accepted file size.
    #[must_use]
    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Sets the streaming chunk size.
    #[must_use]
    pub fn chunk_size(mut self, bytes: usize) -> Self {
        self.chunk_size = bytes;
        self
    }

    /// Adds or replaces an allowed extension.
    #[must_use]
    pub fn allow_type(mut self, extension: &str, mime: &str) -> Self {
        self.allowed_types
            .insert(extension.to_ascii_lowercase(), mime.to_string());
        self
    }

    /// Removes an extension from the allow-list.
    #[must_use]
    pub fn deny_type(mut self, extension: &str) -> Self {
        self.allowed_types.remove(&extension.to_ascii_lowercase());
        self
    }

    /// Looks up the MIME type for an extension, case-insensitively.
    #[must_use]
    pub fn mime_for(&self, extension: &str) -> Option<&str> {
        self.allowed_types
            .get(&extension.to_ascii_lowercase())
            .map(String::as_str)
    }
}
