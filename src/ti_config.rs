//! File configuration for ti.
//!
//! Settings live in an optional `.ti.toml` in the directory ti is run from.
//! Every field has a default, so a missing file or an empty one is valid.
//!
//! # Configuration File Format
//!
//! ```toml
//! [scan]
//! marker = "TODO"
//! skip_dirs = [".git"]
//!
//! [github]
//! remote = "origin"
//! api_url = "https://api.github.com"
//! ```

use crate::github::DEFAULT_API_URL;
use crate::todo::DEFAULT_MARKER;
use crate::tracker::DEFAULT_REMOTE;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = ".ti.toml";

/// What to look for and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSection {
    /// Marker token, matched when followed by a colon or whitespace
    #[serde(default = "default_marker")]
    pub marker: String,
    /// Directory names never descended into. Empty means walk everything.
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_skip_dirs() -> Vec<String> {
    vec![".git".to_string()]
}

impl Default for ScanSection {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            skip_dirs: default_skip_dirs(),
        }
    }
}

/// Where issues go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubSection {
    /// Remote whose URL names the repository
    #[serde(default = "default_remote")]
    pub remote: String,
    /// REST API base, e.g. a GitHub Enterprise `/api/v3` URL
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_remote() -> String {
    DEFAULT_REMOTE.to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for GitHubSection {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            api_url: default_api_url(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TiToml {
    #[serde(default)]
    pub scan: ScanSection,
    #[serde(default)]
    pub github: GitHubSection,
}

impl TiToml {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse .ti.toml")
    }

    /// Load `.ti.toml` from `dir`, or defaults if the file doesn't exist.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration and return any warnings.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.scan.marker.is_empty() {
            warnings.push("scan.marker is empty: almost every line will match".to_string());
        } else if self.scan.marker.chars().any(char::is_whitespace) {
            warnings.push(format!(
                "scan.marker '{}' contains whitespace",
                self.scan.marker
            ));
        }

        if self.github.remote.trim().is_empty() {
            warnings.push("github.remote is empty".to_string());
        }

        if !(self.github.api_url.starts_with("https://")
            || self.github.api_url.starts_with("http://"))
        {
            warnings.push(format!(
                "github.api_url '{}' is not an http(s) URL",
                self.github.api_url
            ));
        }

        warnings
    }
}
