//! Uniform archive listing produced by `read_archive`.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Structured listing of an archive's contents.
///
/// The same shape is produced for ZIP and tar archives. "Child" entries are
/// the root-level subset: names with no directory component. Directory names
/// carry no trailing slash. `file_contents` holds in-memory contents for the
/// members the caller asked for, keyed by their archive path.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArchiveSummary {
    /// Every file path in the archive.
    pub file_names: Vec<String>,
    /// Every directory path, explicit or implied by a file path.
    pub dir_names: Vec<String>,
    /// Files at the archive root.
    pub child_file_names: Vec<String>,
    /// Directories at the archive root.
    pub child_dir_names: Vec<String>,
    /// Whether the archive holds any file.
    pub contains_file: bool,
    /// Whether the archive holds any directory.
    pub contains_dir: bool,
    /// Number of files.
    pub file_count: usize,
    /// Number of directories.
    pub dir_count: usize,
    /// Number of root-level files.
    pub child_file_count: usize,
    /// Number of root-level directories.
    pub child_dir_count: usize,
    /// Contents of the requested members.
    pub file_contents: BTreeMap<String, Vec<u8>>,
}

/// Accumulates entries while an archive is scanned, then finalizes counts.
#[derive(Debug, Default)]
pub(crate) struct SummaryBuilder {
    files: BTreeSet<String>,
    dirs: BTreeSet<String>,
    contents: BTreeMap<String, Vec<u8>>,
}

impl SummaryBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a file entry, deriving any parent directories it implies.
    pub(crate) fn add_file(&mut self, path: &str, contents: Option<Vec<u8>>) {
        let path = path.trim_matches('/');
        if path.is_empty() {
            return;
        }
        self.files.insert(path.to_string());
        self.add_parents(path);
        if let Some(data) = contents {
            self.contents.insert(path.to_string(), data);
        }
    }

    /// Records an explicit directory entry.
    pub(crate) fn add_dir(&mut self, path: &str) {
        let path = path.trim_matches('/');
        if path.is_empty() {
            return;
        }
        self.dirs.insert(path.to_string());
        self.add_parents(path);
    }

    fn add_parents(&mut self, path: &str) {
        let mut idx = 0;
        while let Some(rel) = path[idx..].find('/') {
            idx += rel;
            self.dirs.insert(path[..idx].to_string());
            idx += 1;
        }
    }

    pub(crate) fn finish(self) -> ArchiveSummary {
        let child_file_names: Vec<String> = self
            .files
            .iter()
            .filter(|f| !f.contains('/'))
            .cloned()
            .collect();
        let child_dir_names: Vec<String> = self
            .dirs
            .iter()
            .filter(|d| !d.contains('/'))
            .cloned()
            .collect();

        let file_names: Vec<String> = self.files.into_iter().collect();
        let dir_names: Vec<String> = self.dirs.into_iter().collect();

        ArchiveSummary {
            contains_file: !file_names.is_empty(),
            contains_dir: !dir_names.is_empty(),
            file_count: file_names.len(),
            dir_count: dir_names.len(),
            child_file_count: child_file_names.len(),
            child_dir_count: child_dir_names.len(),
            file_names,
            dir_names,
            child_file_names,
            child_dir_names,
            file_contents: self.contents,
        }
    }
}
