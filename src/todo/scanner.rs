//! Recursive tree scan for marker records.

use super::extract::MarkerExtractor;
use super::types::MarkerRecord;
use crate::errors::ScanError;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Walks a directory tree depth-first and collects marker records.
///
/// Siblings are visited in file-name order, so the output is reproducible on
/// an unchanged tree. Any unreadable file aborts the scan.
#[derive(Debug, Clone, Default)]
pub struct TreeScanner {
    extractor: MarkerExtractor,
    skip_dirs: Vec<String>,
}

impl TreeScanner {
    pub fn new(extractor: MarkerExtractor) -> Self {
        Self {
            extractor,
            skip_dirs: Vec::new(),
        }
    }

    /// Directory names that are never descended into (e.g. `.git`).
    pub fn with_skip_dirs(mut self, skip_dirs: Vec<String>) -> Self {
        self.skip_dirs = skip_dirs;
        self
    }

    fn is_skipped(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.skip_dirs.iter().any(|s| s == name))
    }

    pub fn scan(&self, root: &Path) -> Result<Vec<MarkerRecord>, ScanError> {
        tracing::debug!(root = %root.display(), "scanning for markers");

        let mut records = Vec::new();
        let mut files = 0usize;

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_skipped(entry));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let contents = std::fs::read_to_string(path).map_err(|source| ScanError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            files += 1;

            let before = records.len();
            records.extend(self.extractor.extract(path, &contents));
            if records.len() > before {
                tracing::debug!(
                    file = %path.display(),
                    found = records.len() - before,
                    "markers found"
                );
            }
        }

        tracing::info!(files, markers = records.len(), "scan complete");
        Ok(records)
    }
}
