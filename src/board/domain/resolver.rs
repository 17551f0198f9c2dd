//! Reconciliation between canonical task statuses and board column labels.
//!
//! [`resolve_column`] projects a status onto one label of a board, and
//! [`resolve_status`] maps a chosen column label back to a status. Both are
//! pure and total.

use super::UnmatchedColumnPolicy;
use crate::task::domain::TaskStatus;

/// How a column was chosen for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// The column label equals the canonical status label.
    Exact,
    /// The column label is one of the status aliases.
    Alias,
    /// Nothing matched; the first column was used.
    Fallback,
}

/// Column chosen for a status together with how it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnMatch<'a> {
    /// Label of the chosen column.
    pub label: &'a str,
    /// Rule that selected the column.
    pub kind: MatchKind,
}

/// Returns the column a task with `status` is shown under.
///
/// An exact canonical label wins; otherwise the first column (in board order)
/// that is an alias of the status; otherwise the first column. When several
/// columns share a label the earliest one is returned.
///
/// `columns` is expected to be non-empty. For an empty list the canonical
/// status label is returned so the function stays total.
///
/// # Examples
///
/// ```
/// use projectboard::board::domain::resolve_column;
/// use projectboard::task::domain::TaskStatus;
///
/// let columns = ["To Do", "Doing", "Done"];
/// assert_eq!(resolve_column(TaskStatus::InProgress, &columns), "Doing");
/// ```
#[must_use]
pub fn resolve_column<S: AsRef<str>>(status: TaskStatus, columns: &[S]) -> &str {
    match_column(status, columns).label
}

/// Like [`resolve_column`], also reporting which rule matched.
#[must_use]
pub fn match_column<S: AsRef<str>>(status: TaskStatus, columns: &[S]) -> ColumnMatch<'_> {
    let canonical = status.label();
    if let Some(label) = columns
        .iter()
        .map(|column| column.as_ref())
        .find(|label| *label == canonical)
    {
        return ColumnMatch {
            label,
            kind: MatchKind::Exact,
        };
    }

    let aliases = status.aliases();
    if let Some(label) = columns
        .iter()
        .map(|column| column.as_ref())
        .find(|label| aliases.iter().any(|alias| alias == label))
    {
        return ColumnMatch {
            label,
            kind: MatchKind::Alias,
        };
    }

    ColumnMatch {
        label: columns.first().map_or(canonical, |column| column.as_ref()),
        kind: MatchKind::Fallback,
    }
}

/// Returns the status to store when a task is moved to `chosen_column`.
///
/// A canonical label is adopted directly, a known alias maps to its status,
/// and anything else resets the task to [`TaskStatus::Backlog`].
///
/// # Examples
///
/// ```
/// use projectboard::board::domain::resolve_status;
/// use projectboard::task::domain::TaskStatus;
///
/// assert_eq!(resolve_status("QA", TaskStatus::Backlog), TaskStatus::Review);
/// assert_eq!(resolve_status("Icebox", TaskStatus::Done), TaskStatus::Backlog);
/// ```
#[must_use]
pub fn resolve_status(chosen_column: &str, current: TaskStatus) -> TaskStatus {
    resolve_status_with(chosen_column, current, UnmatchedColumnPolicy::ResetToBacklog)
}

/// Like [`resolve_status`] with an explicit policy for unrecognised columns.
#[must_use]
pub fn resolve_status_with(
    chosen_column: &str,
    current: TaskStatus,
    policy: UnmatchedColumnPolicy,
) -> TaskStatus {
    TaskStatus::from_label(chosen_column)
        .or_else(|| TaskStatus::from_alias(chosen_column))
        .unwrap_or_else(|| policy.fallback(current))
}
