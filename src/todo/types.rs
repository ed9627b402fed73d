//! Records produced by the marker scan.

use std::fmt;
use std::path::{Path, PathBuf};

/// One TODO occurrence found in a source file.
///
/// Records are created by the extractor and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerRecord {
    filepath: PathBuf,
    line_num: usize,
    text: String,
}

impl MarkerRecord {
    pub fn new(filepath: impl Into<PathBuf>, line_num: usize, text: impl Into<String>) -> Self {
        debug_assert!(line_num >= 1, "line numbers are 1-based");
        Self {
            filepath: filepath.into(),
            line_num,
            text: text.into(),
        }
    }

    /// Path of the file the marker was found in, as it was walked.
    pub fn filepath(&self) -> &Path {
        &self.filepath
    }

    /// 1-based line number.
    pub fn line_num(&self) -> usize {
        self.line_num
    }

    /// Text after the marker token. May be empty.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// `file:line`, used in notices and issue bodies.
    pub fn location(&self) -> String {
        format!("{}:{}", self.filepath.display(), self.line_num)
    }
}

impl fmt::Display for MarkerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.location())
        } else {
            write!(f, "{} {}", self.location(), self.text)
        }
    }
}
