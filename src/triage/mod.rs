//! Interactive triage of discovered TODOs.
//!
//! The loop walks the scanned records in order. For each one it asks the
//! `Prompter` for a single choice among `Action::ALL`, dispatches it, and
//! stops early when the terminal action is chosen. The repository identity is
//! resolved once, before the first record is shown.
//!
//! Two seams keep the loop testable:
//! - `Prompter`: console menu (real: `ui::prompt::SelectPrompter`)
//! - `IssueService`: remote issue creation (real: `github::GitHubIssues`)

pub mod actions;

pub use actions::Action;

use crate::errors::TriageError;
use crate::todo::MarkerRecord;
use crate::tracker::{ConfigSource, RepositoryIdentity, resolve_identity};
use async_trait::async_trait;

/// Presents one record and returns the index of the chosen action.
pub trait Prompter {
    fn choose(&mut self, record: &MarkerRecord, actions: &[Action]) -> Result<usize, TriageError>;
}

/// Creates one remote issue per call.
#[async_trait]
pub trait IssueService: Send + Sync {
    async fn open_issue(
        &self,
        record: &MarkerRecord,
        credential: &str,
        identity: &RepositoryIdentity,
    ) -> anyhow::Result<()>;
}

/// What happened during a triage run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriageSummary {
    pub opened: usize,
    pub skipped: usize,
    /// Records never shown because the operator exited first.
    pub abandoned: usize,
    pub exited: bool,
}

pub struct Triage<P, S> {
    prompter: P,
    issues: S,
    credential: String,
}

impl<P: Prompter, S: IssueService> Triage<P, S> {
    pub fn new(prompter: P, issues: S, credential: impl Into<String>) -> Self {
        Self {
            prompter,
            issues,
            credential: credential.into(),
        }
    }

    /// Resolve the identity from `source`, then triage `records` in order.
    ///
    /// Identity, prompt and issue failures abort the run. Records already
    /// dispatched stay dispatched.
    pub async fn run(
        &mut self,
        records: Vec<MarkerRecord>,
        source: &dyn ConfigSource,
        remote: &str,
    ) -> Result<TriageSummary, TriageError> {
        let identity = resolve_identity(source, remote)?;
        tracing::info!(%identity, records = records.len(), "starting triage");

        let total = records.len();
        let mut summary = TriageSummary::default();

        for (pos, record) in records.into_iter().enumerate() {
            let index = self.prompter.choose(&record, &Action::ALL)?;
            let action = Action::from_index(index).ok_or(TriageError::InvalidSelection { index })?;
            tracing::debug!(location = %record.location(), %action, "dispatching");

            actions::dispatch(action, &record, &self.credential, &identity, &self.issues).await?;

            match action {
                Action::Open => summary.opened += 1,
                Action::Skip => summary.skipped += 1,
                Action::Exit => {}
            }

            if action.is_terminal() {
                summary.exited = true;
                summary.abandoned = total - pos - 1;
                break;
            }
        }

        tracing::info!(?summary, "triage finished");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::IdentityError;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    struct FakeConfig {
        user: Option<&'static str>,
    }

    impl ConfigSource for FakeConfig {
        fn user_name(&self) -> Result<Option<String>, IdentityError> {
            Ok(self.user.map(str::to_string))
        }

        fn remote_url(&self, _remote: &str) -> Result<Option<String>, IdentityError> {
            Ok(Some("git@github.com:alice/myrepo.git".to_string()))
        }
    }

    const ALICE: FakeConfig = FakeConfig {
        user: Some("alice"),
    };

    /// Replays a fixed list of choices; `None` simulates a closed input stream.
    struct ScriptedPrompter {
        script: VecDeque<Option<usize>>,
        shown: Arc<Mutex<Vec<MarkerRecord>>>,
    }

    impl ScriptedPrompter {
        fn new(script: &[Option<usize>]) -> (Self, Arc<Mutex<Vec<MarkerRecord>>>) {
            let shown = Arc::new(Mutex::new(Vec::new()));
            let prompter = Self {
                script: script.iter().copied().collect(),
                shown: shown.clone(),
            };
            (prompter, shown)
        }
    }

    impl Prompter for ScriptedPrompter {
        fn choose(
            &mut self,
            record: &MarkerRecord,
            actions: &[Action],
        ) -> Result<usize, TriageError> {
            assert_eq!(actions, &Action::ALL);
            self.shown.lock().unwrap().push(record.clone());
            self.script
                .pop_front()
                .flatten()
                .ok_or(TriageError::Aborted)
        }
    }

    type Calls = Arc<Mutex<Vec<(MarkerRecord, String, RepositoryIdentity)>>>;

    #[derive(Default)]
    struct RecordingIssues {
        calls: Calls,
        fail: bool,
    }

    #[async_trait]
    impl IssueService for RecordingIssues {
        async fn open_issue(
            &self,
            record: &MarkerRecord,
            credential: &str,
            identity: &RepositoryIdentity,
        ) -> anyhow::Result<()> {
            self.calls.lock().unwrap().push((
                record.clone(),
                credential.to_string(),
                identity.clone(),
            ));
            if self.fail {
                anyhow::bail!("GitHub issues API returned 502");
            }
            Ok(())
        }
    }

    fn records(n: usize) -> Vec<MarkerRecord> {
        (1..=n)
            .map(|i| MarkerRecord::new("src/lib.rs", i * 10, format!("item {i}")))
            .collect()
    }

    const OPEN: Option<usize> = Some(0);
    const SKIP: Option<usize> = Some(1);
    const EXIT: Option<usize> = Some(2);

    #[tokio::test]
    async fn test_skip_skip_exit_opens_nothing() {
        let (prompter, shown) = ScriptedPrompter::new(&[SKIP, SKIP, EXIT]);
        let issues = RecordingIssues::default();
        let calls = issues.calls.clone();

        let mut triage = Triage::new(prompter, issues, "ghp_token");
        let summary = triage.run(records(3), &ALICE, "origin").await.unwrap();

        assert!(calls.lock().unwrap().is_empty());
        assert_eq!(shown.lock().unwrap().len(), 3);
        assert_eq!(
            summary,
            TriageSummary {
                opened: 0,
                skipped: 2,
                abandoned: 0,
                exited: true,
            }
        );
    }

    #[tokio::test]
    async fn test_exit_abandons_remaining_records() {
        let (prompter, shown) = ScriptedPrompter::new(&[SKIP, EXIT, OPEN, OPEN]);
        let issues = RecordingIssues::default();
        let calls = issues.calls.clone();

        let mut triage = Triage::new(prompter, issues, "ghp_token");
        let summary = triage.run(records(4), &ALICE, "origin").await.unwrap();

        let shown = shown.lock().unwrap();
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[1].line_num(), 20);
        assert!(calls.lock().unwrap().is_empty());
        assert_eq!(summary.abandoned, 2);
        assert!(summary.exited);
    }

    #[tokio::test]
    async fn test_open_delegates_record_credential_and_identity() {
        let (prompter, _shown) = ScriptedPrompter::new(&[OPEN, SKIP, OPEN]);
        let issues = RecordingIssues::default();
        let calls = issues.calls.clone();

        let mut triage = Triage::new(prompter, issues, "ghp_secret");
        let summary = triage.run(records(3), &ALICE, "origin").await.unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0.text(), "item 1");
        assert_eq!(calls[1].0.text(), "item 3");
        assert_eq!(calls[0].1, "ghp_secret");
        assert_eq!(calls[0].2.owner, "alice");
        assert_eq!(calls[0].2.repo, "myrepo");
        assert_eq!(summary.opened, 2);
        assert_eq!(summary.skipped, 1);
        assert!(!summary.exited);
    }

    #[tokio::test]
    async fn test_each_record_is_presented_exactly_once() {
        let (prompter, shown) = ScriptedPrompter::new(&[SKIP, OPEN, SKIP, OPEN, SKIP]);
        let mut triage = Triage::new(prompter, RecordingIssues::default(), "t");
        triage.run(records(5), &ALICE, "origin").await.unwrap();

        let lines: Vec<usize> = shown.lock().unwrap().iter().map(|r| r.line_num()).collect();
        assert_eq!(lines, vec![10, 20, 30, 40, 50]);
    }

    #[tokio::test]
    async fn test_missing_user_fails_before_any_prompt() {
        let (prompter, shown) = ScriptedPrompter::new(&[OPEN]);
        let mut triage = Triage::new(prompter, RecordingIssues::default(), "t");
        let no_user = FakeConfig { user: None };

        let err = triage.run(records(2), &no_user, "origin").await.unwrap_err();

        assert!(matches!(err, TriageError::Identity(IdentityError::NoUser)));
        assert!(shown.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_prompt_failure_aborts_run() {
        let (prompter, shown) = ScriptedPrompter::new(&[OPEN, None, SKIP]);
        let issues = RecordingIssues::default();
        let calls = issues.calls.clone();

        let mut triage = Triage::new(prompter, issues, "t");
        let err = triage.run(records(3), &ALICE, "origin").await.unwrap_err();

        assert!(matches!(err, TriageError::Aborted));
        assert_eq!(shown.lock().unwrap().len(), 2);
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_issue_failure_propagates_without_retry() {
        let (prompter, shown) = ScriptedPrompter::new(&[OPEN, OPEN]);
        let issues = RecordingIssues {
            fail: true,
            ..Default::default()
        };
        let calls = issues.calls.clone();

        let mut triage = Triage::new(prompter, issues, "t");
        let err = triage.run(records(2), &ALICE, "origin").await.unwrap_err();

        assert!(matches!(err, TriageError::Issue(_)));
        assert!(err.to_string().contains("502"));
        assert_eq!(calls.lock().unwrap().len(), 1);
        assert_eq!(shown.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_out_of_range_selection_is_rejected() {
        let (prompter, _shown) = ScriptedPrompter::new(&[Some(9)]);
        let mut triage = Triage::new(prompter, RecordingIssues::default(), "t");
        let err = triage.run(records(1), &ALICE, "origin").await.unwrap_err();
        assert!(matches!(err, TriageError::InvalidSelection { index: 9 }));
    }

    #[tokio::test]
    async fn test_empty_record_list_halts_normally() {
        let (prompter, shown) = ScriptedPrompter::new(&[]);
        let mut triage = Triage::new(prompter, RecordingIssues::default(), "t");
        let summary = triage.run(Vec::new(), &ALICE, "origin").await.unwrap();
        assert_eq!(summary, TriageSummary::default());
        assert!(shown.lock().unwrap().is_empty());
    }
}
