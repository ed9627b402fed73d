//! The fixed set of per-record actions and their dispatch.

use super::IssueService;
use crate::errors::TriageError;
use crate::todo::MarkerRecord;
use crate::tracker::RepositoryIdentity;
use crate::ui::message;
use std::fmt;

/// What the operator can do with one TODO.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Open,
    Skip,
    Exit,
}

impl Action {
    /// Menu order. The last entry ends the triage.
    pub const ALL: [Action; 3] = [Action::Open, Action::Skip, Action::Exit];

    pub fn label(self) -> &'static str {
        match self {
            Action::Open => "Open Issue",
            Action::Skip => "Skip Issue",
            Action::Exit => "Exit",
        }
    }

    pub fn from_index(index: usize) -> Option<Action> {
        Self::ALL.get(index).copied()
    }

    /// True for the last-defined action.
    pub fn is_terminal(self) -> bool {
        Self::ALL.last() == Some(&self)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn skip_notice(record: &MarkerRecord) -> String {
    format!("Skipped TODO from {}.", record.location())
}

pub const EXIT_NOTICE: &str = "Exiting.";

/// Run one action against one record.
///
/// Issue service failures are returned as-is; nothing here retries.
pub async fn dispatch(
    action: Action,
    record: &MarkerRecord,
    credential: &str,
    identity: &RepositoryIdentity,
    issues: &dyn IssueService,
) -> Result<(), TriageError> {
    match action {
        Action::Open => issues
            .open_issue(record, credential, identity)
            .await
            .map_err(TriageError::Issue),
        Action::Skip => {
            message::print_warning(&skip_notice(record));
            Ok(())
        }
        Action::Exit => {
            message::print_warning(EXIT_NOTICE);
            Ok(())
        }
    }
}
