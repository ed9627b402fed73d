//! Where issues are filed: the repository identity read from git config.

pub mod git;

pub use git::{
    ConfigSource, DEFAULT_REMOTE, GitConfig, RepositoryIdentity, parse_repo_name, resolve_identity,
};
