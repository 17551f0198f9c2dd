//! Board defaults and the unmatched-column policy.

use super::{Board, BoardDomainError};
use crate::task::domain::TaskStatus;
use serde::{Deserialize, Serialize};

/// Name of the board every new workspace starts with.
pub const DEFAULT_BOARD_NAME: &str = "Default Kanban Board";

/// Status chosen when a task is moved to a column that is neither a canonical
/// status label nor a known alias.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedColumnPolicy {
    /// Send the task back to [`TaskStatus::Backlog`] for re-triage.
    #[default]
    ResetToBacklog,
    /// Leave the task status unchanged.
    KeepCurrent,
}

impl UnmatchedColumnPolicy {
    /// Returns the status to store for an unrecognised column.
    #[must_use]
    pub const fn fallback(self, current: TaskStatus) -> TaskStatus {
        match self {
            Self::ResetToBacklog => TaskStatus::Backlog,
            Self::KeepCurrent => current,
        }
    }
}

/// Configuration for board defaults and status writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSettings {
    /// Name given to the board created for an empty workspace.
    pub default_board_name: String,
    /// Columns of the board created for an empty workspace.
    pub default_columns: Vec<String>,
    /// Status assigned when a task lands in an unrecognised column.
    pub unmatched_column_policy: UnmatchedColumnPolicy,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            default_board_name: DEFAULT_BOARD_NAME.to_owned(),
            default_columns: TaskStatus::ALL
                .iter()
                .map(|status| status.label().to_owned())
                .collect(),
            unmatched_column_policy: UnmatchedColumnPolicy::ResetToBacklog,
        }
    }
}

impl BoardSettings {
    /// Creates settings that keep a task's status when it is moved to an
    /// unrecognised column.
    #[must_use]
    pub fn keep_status_on_unknown_column() -> Self {
        Self {
            unmatched_column_policy: UnmatchedColumnPolicy::KeepCurrent,
            ..Self::default()
        }
    }

    /// Builds the default board described by these settings.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError`] when the configured name or columns are
    /// empty.
    pub fn default_board(&self) -> Result<Board, BoardDomainError> {
        Board::new(
            self.default_board_name.clone(),
            self.default_columns.iter().cloned(),
        )
    }
}
