//! Scan-then-triage, and the `--list` variant.

use anyhow::Result;
use std::path::Path;
use ti::config::Config;
use ti::github::{GitHubIssues, is_valid_github_token};
use ti::todo::MarkerRecord;
use ti::tracker::GitConfig;
use ti::triage::Triage;
use ti::ui::{SelectPrompter, message};

fn scan(config: &Config) -> Result<Vec<MarkerRecord>> {
    let records = config.scanner()?.scan(&config.root)?;
    Ok(records)
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Print every record as `file:line text`.
pub fn cmd_list(config: &Config) -> Result<()> {
    let records = scan(config)?;
    for record in &records {
        println!("{}", record);
    }
    message::print_note(&format!(
        "{} {}{} found.",
        records.len(),
        config.marker,
        plural(records.len())
    ));
    Ok(())
}

/// Scan `config.root`, then walk the operator through each record.
pub async fn cmd_triage(config: &Config, project_dir: &Path) -> Result<()> {
    let records = scan(config)?;
    if records.is_empty() {
        message::print_note(&format!("No {}s found.", config.marker));
        return Ok(());
    }

    let token = config.token()?;
    if !is_valid_github_token(token) {
        tracing::warn!("GitHub token does not start with a known prefix (ghp_, github_pat_, ...)");
    }

    let source = GitConfig::discover(project_dir)?;
    let issues = GitHubIssues::new(config.api_url.clone());
    let mut triage = Triage::new(SelectPrompter::default(), issues, token);
    let summary = triage.run(records, &source, &config.remote).await?;

    let mut line = format!(
        "{} issue{} opened, {} skipped.",
        summary.opened,
        plural(summary.opened),
        summary.skipped
    );
    if summary.abandoned > 0 {
        line.push_str(&format!(" {} left for next time.", summary.abandoned));
    }
    message::print_note(&line);
    Ok(())
}
