//! Board aggregate: a named, ordered, non-empty list of column labels.

use super::{BoardDomainError, BoardId, ColumnMatch, match_column};
use crate::task::domain::TaskStatus;
use serde::{Deserialize, Serialize};

/// User-defined board used to group tasks into columns.
///
/// Column labels are free text and need not be unique; duplicate labels
/// resolve to the earliest occurrence. A board always has at least one
/// column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRecord")]
pub struct Board {
    id: BoardId,
    name: String,
    columns: Vec<String>,
}

/// Unvalidated wire shape of a board.
#[derive(Debug, Deserialize)]
struct BoardRecord {
    id: BoardId,
    name: String,
    columns: Vec<String>,
}

impl TryFrom<BoardRecord> for Board {
    type Error = BoardDomainError;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        let (name, columns) = validate(record.name, record.columns)?;
        Ok(Self {
            id: record.id,
            name,
            columns,
        })
    }
}

impl Board {
    /// Creates a board with a fresh identifier.
    ///
    /// The name and labels are trimmed and blank labels are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyBoardName`] for a blank name or
    /// [`BoardDomainError::NoColumns`] when no non-blank label remains.
    pub fn new<I, S>(name: impl Into<String>, columns: I) -> Result<Self, BoardDomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (name, columns) = validate(name.into(), columns.into_iter().map(Into::into).collect())?;
        Ok(Self {
            id: BoardId::new(),
            name,
            columns,
        })
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> &BoardId {
        &self.id
    }

    /// Returns the board name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column labels in display order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the column a task with `status` is displayed under.
    #[must_use]
    pub fn resolve_column(&self, status: TaskStatus) -> &str {
        self.match_column(status).label
    }

    /// Returns the column for `status` together with the matching rule.
    #[must_use]
    pub fn match_column(&self, status: TaskStatus) -> ColumnMatch<'_> {
        match_column(status, &self.columns)
    }

    /// Renames the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyBoardName`] for a blank name.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), BoardDomainError> {
        self.name = trimmed(name.into()).ok_or(BoardDomainError::EmptyBoardName)?;
        Ok(())
    }

    /// Replaces the name and column list in one step.
    ///
    /// Nothing changes when validation fails.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Board::new`].
    pub fn edit<I, S>(&mut self, name: impl Into<String>, columns: I) -> Result<(), BoardDomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (new_name, new_columns) =
            validate(name.into(), columns.into_iter().map(Into::into).collect())?;
        self.name = new_name;
        self.columns = new_columns;
        Ok(())
    }

    /// Appends a column and returns its index.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyColumnLabel`] for a blank label.
    pub fn add_column(&mut self, label: impl Into<String>) -> Result<usize, BoardDomainError> {
        let column = trimmed(label.into()).ok_or(BoardDomainError::EmptyColumnLabel)?;
        self.columns.push(column);
        Ok(self.columns.len().saturating_sub(1))
    }

    /// Renames the column at `index`.
    ///
    /// A blank or unchanged label leaves the column as it was and returns
    /// `false`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnOutOfRange`] for an unknown index.
    pub fn rename_column(
        &mut self,
        index: usize,
        label: impl Into<String>,
    ) -> Result<bool, BoardDomainError> {
        let len = self.columns.len();
        let column = self
            .columns
            .get_mut(index)
            .ok_or(BoardDomainError::ColumnOutOfRange { index, len })?;
        match trimmed(label.into()) {
            Some(new_label) if new_label != *column => {
                *column = new_label;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Swaps the column at `index` with its left neighbour.
    ///
    /// Returns `false` for the first column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnOutOfRange`] for an unknown index.
    pub fn move_column_left(&mut self, index: usize) -> Result<bool, BoardDomainError> {
        self.check_index(index)?;
        let Some(left) = index.checked_sub(1) else {
            return Ok(false);
        };
        self.columns.swap(left, index);
        Ok(true)
    }

    /// Swaps the column at `index` with its right neighbour.
    ///
    /// Returns `false` for the last column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnOutOfRange`] for an unknown index.
    pub fn move_column_right(&mut self, index: usize) -> Result<bool, BoardDomainError> {
        self.check_index(index)?;
        let right = index.saturating_add(1);
        if right >= self.columns.len() {
            return Ok(false);
        }
        self.columns.swap(index, right);
        Ok(true)
    }

    /// Removes the column at `index` and returns its label.
    ///
    /// Tasks are untouched; they resolve against the shortened list the next
    /// time they are displayed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnOutOfRange`] for an unknown index or
    /// [`BoardDomainError::LastColumn`] when this is the only column.
    pub fn remove_column(&mut self, index: usize) -> Result<String, BoardDomainError> {
        self.check_index(index)?;
        if self.columns.len() <= 1 {
            return Err(BoardDomainError::LastColumn(self.id.clone()));
        }
        Ok(self.columns.remove(index))
    }

    fn check_index(&self, index: usize) -> Result<(), BoardDomainError> {
        let len = self.columns.len();
        if index < len {
            Ok(())
        } else {
            Err(BoardDomainError::ColumnOutOfRange { index, len })
        }
    }
}

/// Splits a comma-separated column list, trimming labels and dropping blanks.
///
/// # Examples
///
/// ```
/// use projectboard::board::domain::parse_column_list;
///
/// assert_eq!(
///     parse_column_list("To Do, In Progress,,Done "),
///     vec!["To Do", "In Progress", "Done"],
/// );
/// ```
#[must_use]
pub fn parse_column_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_owned)
        .collect()
}

fn validate(name: String, columns: Vec<String>) -> Result<(String, Vec<String>), BoardDomainError> {
    let board_name = trimmed(name).ok_or(BoardDomainError::EmptyBoardName)?;
    let labels: Vec<String> = columns.into_iter().filter_map(trimmed).collect();
    if labels.is_empty() {
        return Err(BoardDomainError::NoColumns);
    }
    Ok((board_name, labels))
}

fn trimmed(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
