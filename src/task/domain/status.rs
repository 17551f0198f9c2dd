//! Canonical task status vocabulary and the column alias table.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical task lifecycle status.
///
/// This is the only persisted lifecycle state of a task. Board columns are a
/// view-time projection of it and never feed back into it implicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Task has not been started.
    #[default]
    #[serde(rename = "Backlog")]
    Backlog,
    /// Task is being worked on.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Task is awaiting review or testing.
    #[serde(rename = "Review")]
    Review,
    /// Task is complete.
    #[serde(rename = "Done")]
    Done,
}

const BACKLOG_ALIASES: &[&str] = &["To Do", "Backlog", "Open", "New"];
const IN_PROGRESS_ALIASES: &[&str] = &["Doing", "In Progress", "Development", "Working"];
const REVIEW_ALIASES: &[&str] = &["Review", "Testing", "QA", "Validation"];
const DONE_ALIASES: &[&str] = &["Done", "Completed", "Closed", "Finished", "Deployment"];

impl TaskStatus {
    /// Every status in lifecycle order.
    pub const ALL: [Self; 4] = [Self::Backlog, Self::InProgress, Self::Review, Self::Done];

    /// Returns the canonical column label for this status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }

    /// Returns the column names commonly used for this status.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Backlog => BACKLOG_ALIASES,
            Self::InProgress => IN_PROGRESS_ALIASES,
            Self::Review => REVIEW_ALIASES,
            Self::Done => DONE_ALIASES,
        }
    }

    /// Returns the status whose canonical label is exactly `label`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }

    /// Returns the status whose alias set contains exactly `label`.
    #[must_use]
    pub fn from_alias(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.aliases().iter().any(|alias| *alias == label))
    }

    /// Returns `true` for [`TaskStatus::Done`].
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "backlog" => Ok(Self::Backlog),
            "in progress" | "inprogress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
