use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;

use crate::ti_config::TiToml;
use crate::todo::{MarkerExtractor, TreeScanner};

pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Runtime configuration for one ti run.
///
/// Merges `.ti.toml` (file) with environment variables and CLI arguments,
/// in that order of increasing precedence.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the scan starts from
    pub root: PathBuf,
    pub marker: String,
    pub skip_dirs: Vec<String>,
    pub remote: String,
    pub api_url: String,
    pub verbose: bool,
    token: Option<String>,
    /// The parsed file layer
    toml: TiToml,
}

impl Config {
    /// Build the configuration for scanning `root`, reading `.ti.toml` from
    /// `project_dir` and overrides from the environment.
    pub fn new(
        project_dir: PathBuf,
        root: PathBuf,
        cli_token: Option<String>,
        verbose: bool,
    ) -> Result<Self> {
        let toml = TiToml::load_or_default(&project_dir)?;
        let env_token = std::env::var(TOKEN_ENV).ok();
        let env_api_url = std::env::var(API_URL_ENV).ok();

        Ok(Self::from_layers(
            toml,
            root,
            resolve_token(cli_token, env_token),
            env_api_url,
            verbose,
        ))
    }

    /// Combine already-read layers. Used by `new` and directly by tests.
    pub fn from_layers(
        toml: TiToml,
        root: PathBuf,
        token: Option<String>,
        env_api_url: Option<String>,
        verbose: bool,
    ) -> Self {
        let api_url = env_api_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| toml.github.api_url.clone());

        Self {
            root,
            marker: toml.scan.marker.clone(),
            skip_dirs: toml.scan.skip_dirs.clone(),
            remote: toml.github.remote.clone(),
            api_url,
            verbose,
            token,
            toml,
        }
    }

    /// Warnings from the file layer.
    pub fn validate(&self) -> Vec<String> {
        self.toml.validate()
    }

    /// The GitHub credential. Only triage needs it.
    pub fn token(&self) -> Result<&str> {
        self.token.as_deref().ok_or_else(|| {
            anyhow!(
                "No GitHub token found. Set {} or pass --token",
                TOKEN_ENV
            )
        })
    }

    /// Scanner for the configured marker and skip list.
    pub fn scanner(&self) -> Result<TreeScanner> {
        let extractor = MarkerExtractor::new(&self.marker)
            .with_context(|| format!("Invalid marker '{}'", self.marker))?;
        Ok(TreeScanner::new(extractor).with_skip_dirs(self.skip_dirs.clone()))
    }
}

/// CLI → environment; blank values count as unset.
pub fn resolve_token(cli: Option<String>, env: Option<String>) -> Option<String> {
    cli.into_iter()
        .chain(env)
        .map(|t| t.trim().to_string())
        .find(|t| !t.is_empty())
}
