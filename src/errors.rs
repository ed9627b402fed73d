//! Typed error hierarchy for ti.
//!
//! Three top-level enums cover the three subsystems:
//! - `ScanError`: directory traversal and file reads
//! - `IdentityError`: resolving the GitHub owner/repo from git config
//! - `TriageError`: the interactive decision loop and its actions
//!
//! Every variant is fatal to the run. They travel up to `main` as results.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from scanning a source tree for markers.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Errors from resolving the repository identity.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("This directory is not inside a git repository")]
    NoRepository(#[source] git2::Error),

    #[error("This directory has no GitHub user (git config user.name is not set)")]
    NoUser,

    #[error("This directory has no GitHub remote named '{remote}'")]
    NoRemote { remote: String },

    #[error("Cannot derive repository name from remote URL '{url}': {reason}")]
    MalformedRemote { url: String, reason: String },

    #[error("Git configuration error: {0}")]
    Git(#[from] git2::Error),
}

/// Errors from the triage loop.
#[derive(Debug, Error)]
pub enum TriageError {
    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Triage aborted by operator")]
    Aborted,

    #[error("Selection {index} is not a valid option")]
    InvalidSelection { index: usize },

    #[error("Failed to open issue: {0}")]
    Issue(#[source] anyhow::Error),
}
