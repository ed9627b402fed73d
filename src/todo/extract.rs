//! Marker extraction from a single file's contents.
//!
//! A line qualifies when it contains the marker token followed by a colon or
//! whitespace. This is a plain pattern match: markers inside string literals
//! count too.

use super::types::MarkerRecord;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Default marker token.
pub const DEFAULT_MARKER: &str = "TODO";

static DEFAULT_REGEX: LazyLock<Regex> = LazyLock::new(|| marker_regex(DEFAULT_MARKER).unwrap());

fn marker_regex(marker: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"{}[:\s](.*)$", regex::escape(marker)))
}

/// Strip the delimiters that separate the marker from its text.
fn clean_text(raw: &str) -> &str {
    raw.trim_start_matches(|c: char| c == ':' || c.is_whitespace())
        .trim_end()
}

/// Extracts `MarkerRecord`s for one marker token.
#[derive(Debug, Clone)]
pub struct MarkerExtractor {
    regex: Regex,
}

impl Default for MarkerExtractor {
    fn default() -> Self {
        Self {
            regex: DEFAULT_REGEX.clone(),
        }
    }
}

impl MarkerExtractor {
    pub fn new(marker: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: marker_regex(marker)?,
        })
    }

    /// Lazily yield one record per qualifying line, in file order.
    ///
    /// Only the first marker on a line is considered.
    pub fn extract<'a>(
        &'a self,
        filepath: &'a Path,
        contents: &'a str,
    ) -> impl Iterator<Item = MarkerRecord> + 'a {
        contents.lines().enumerate().filter_map(move |(idx, line)| {
            let caps = self.regex.captures(line)?;
            let text = caps.get(1).map_or("", |m| m.as_str());
            Some(MarkerRecord::new(filepath, idx + 1, clean_text(text)))
        })
    }
}
