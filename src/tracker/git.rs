use crate::errors::IdentityError;
use git2::{ErrorCode, Repository};
use std::fmt;
use std::path::Path;

/// Remote consulted when none is configured.
pub const DEFAULT_REMOTE: &str = "origin";

/// Suffix stripped from the path segment after the owner.
const GIT_SUFFIX: &str = ".git";

/// Read access to the two git settings the resolver needs.
///
/// `Ok(None)` means the setting is not configured.
pub trait ConfigSource {
    fn user_name(&self) -> Result<Option<String>, IdentityError>;
    fn remote_url(&self, remote: &str) -> Result<Option<String>, IdentityError>;
}

/// `ConfigSource` backed by the git repository containing a directory.
pub struct GitConfig {
    repo: Repository,
}

impl GitConfig {
    /// Find the repository that contains `dir`, searching parent directories.
    pub fn discover(dir: &Path) -> Result<Self, IdentityError> {
        let repo = Repository::discover(dir).map_err(IdentityError::NoRepository)?;
        Ok(Self { repo })
    }
}

fn not_found_as_none<T>(result: Result<T, git2::Error>) -> Result<Option<T>, IdentityError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl ConfigSource for GitConfig {
    fn user_name(&self) -> Result<Option<String>, IdentityError> {
        let config = self.repo.config()?;
        not_found_as_none(config.get_string("user.name"))
    }

    fn remote_url(&self, remote: &str) -> Result<Option<String>, IdentityError> {
        let remote = not_found_as_none(self.repo.find_remote(remote))?;
        Ok(remote.and_then(|r| r.url().map(str::to_string)))
    }
}

/// The GitHub `(owner, repo)` issues are filed against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryIdentity {
    pub owner: String,
    pub repo: String,
}

impl fmt::Display for RepositoryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Resolve the owner from `user.name` and the repository name from the URL of
/// `remote`. Both must be present.
pub fn resolve_identity(
    source: &dyn ConfigSource,
    remote: &str,
) -> Result<RepositoryIdentity, IdentityError> {
    let owner = source
        .user_name()?
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or(IdentityError::NoUser)?;

    let url = source
        .remote_url(remote)?
        .ok_or_else(|| IdentityError::NoRemote {
            remote: remote.to_string(),
        })?;

    let repo = parse_repo_name(&url, &owner)?;
    tracing::debug!(%owner, %repo, %url, "resolved repository identity");
    Ok(RepositoryIdentity { owner, repo })
}

/// Take the path segment that follows `<owner>/` in a remote URL and strip
/// its `.git` suffix.
///
/// Only URLs of the form `...<owner>/<name>.git` are accepted:
/// - `git@github.com:owner/repo.git`
/// - `https://github.com/owner/repo.git`
///
/// URLs without the suffix are rejected rather than guessed at.
pub fn parse_repo_name(url: &str, owner: &str) -> Result<String, IdentityError> {
    let url = url.trim();
    let malformed = |reason: String| IdentityError::MalformedRemote {
        url: url.to_string(),
        reason,
    };

    // The owner must be a whole segment: at the start, or after `/` or `:`.
    let needle = format!("{}/", owner);
    let start = url
        .match_indices(&needle)
        .find(|(idx, _)| *idx == 0 || url[..*idx].ends_with(['/', ':']))
        .map(|(idx, _)| idx + needle.len())
        .ok_or_else(|| malformed(format!("owner '{}' does not appear in the URL", owner)))?;

    let name = url[start..]
        .strip_suffix(GIT_SUFFIX)
        .ok_or_else(|| malformed(format!("expected the URL to end in '{}'", GIT_SUFFIX)))?;

    if name.is_empty() || name.contains('/') {
        return Err(malformed(format!(
            "expected exactly one path segment after '{}'",
            needle
        )));
    }

    Ok(name.to_string())
}
