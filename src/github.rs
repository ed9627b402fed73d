//! GitHub issue creation for the "open" action.

use crate::todo::MarkerRecord;
use crate::tracker::RepositoryIdentity;
use crate::triage::IssueService;
use crate::ui::message;
use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = "ti";

/// Body of `POST /repos/{owner}/{repo}/issues`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
}

impl NewIssue {
    /// The TODO text becomes the title; the body points back at the source.
    pub fn from_record(record: &MarkerRecord) -> Self {
        let title = if record.text().is_empty() {
            format!("TODO in {}", record.location())
        } else {
            record.text().to_string()
        };
        Self {
            title,
            body: format!("TODO found at `{}`.", record.location()),
        }
    }
}

/// A GitHub issue (subset of fields).
#[derive(Debug, Deserialize)]
pub struct GitHubIssue {
    pub number: i64,
    pub title: String,
    pub html_url: String,
}

/// Known GitHub token prefixes.
/// See: https://github.blog/2021-04-05-behind-githubs-new-authentication-token-formats/
const GITHUB_TOKEN_PREFIXES: &[&str] = &[
    "ghp_",        // Personal access tokens (classic)
    "github_pat_", // Fine-grained personal access tokens
    "gho_",        // OAuth access tokens
    "ghu_",        // GitHub App user-to-server tokens
    "ghs_",        // GitHub App server-to-server tokens
    "ghr_",        // GitHub App refresh tokens
];

/// Validate that a string looks like a GitHub token based on its prefix.
///
/// Format check only; it does not verify the token is active or scoped.
pub fn is_valid_github_token(token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    GITHUB_TOKEN_PREFIXES
        .iter()
        .any(|prefix| token.starts_with(prefix))
}

/// `IssueService` that talks to the GitHub REST API.
pub struct GitHubIssues {
    client: reqwest::Client,
    api_url: String,
}

impl GitHubIssues {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    fn issues_url(&self, identity: &RepositoryIdentity) -> String {
        format!(
            "{}/repos/{}/{}/issues",
            self.api_url.trim_end_matches('/'),
            identity.owner,
            identity.repo
        )
    }

    pub async fn create_issue(
        &self,
        token: &str,
        identity: &RepositoryIdentity,
        issue: &NewIssue,
    ) -> anyhow::Result<GitHubIssue> {
        let url = self.issues_url(identity);
        tracing::debug!(%url, title = %issue.title, "creating issue");

        self.client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
            .json(issue)
            .send()
            .await
            .context("Failed to send issue request to GitHub")?
            .error_for_status()
            .context("GitHub issues API returned error status")?
            .json::<GitHubIssue>()
            .await
            .context("Failed to parse issue response from GitHub")
    }
}

#[async_trait]
impl IssueService for GitHubIssues {
    async fn open_issue(
        &self,
        record: &MarkerRecord,
        credential: &str,
        identity: &RepositoryIdentity,
    ) -> anyhow::Result<()> {
        let issue = NewIssue::from_record(record);
        let created = self.create_issue(credential, identity, &issue).await?;
        tracing::info!(number = created.number, url = %created.html_url, "issue created");
        message::print_success(&format!(
            "Created issue #{} in {}: {}",
            created.number, identity, created.html_url
        ));
        Ok(())
    }
}
