//! Error types for board domain validation.

use super::BoardId;
use thiserror::Error;

/// Errors returned while constructing or mutating boards and the board
/// catalog.
///
/// [`BoardDomainError::LastBoard`] and [`BoardDomainError::LastColumn`] are
/// guard rejections: the operation is refused and no state changes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The board name is empty after trimming.
    #[error("board name must not be empty")]
    EmptyBoardName,

    /// A board must have at least one column.
    #[error("board must have at least one column")]
    NoColumns,

    /// A column label is empty after trimming.
    #[error("column label must not be empty")]
    EmptyColumnLabel,

    /// A column index does not exist on the board.
    #[error("column index {index} out of range for board with {len} columns")]
    ColumnOutOfRange {
        /// Requested column index.
        index: usize,
        /// Number of columns on the board.
        len: usize,
    },

    /// Removing the only column of a board is refused.
    #[error("cannot delete the last column of board {0}")]
    LastColumn(BoardId),

    /// Deleting the only board is refused.
    #[error("cannot delete the last board {0}")]
    LastBoard(BoardId),

    /// The board does not exist in the catalog.
    #[error("board not found: {0}")]
    BoardNotFound(BoardId),

    /// A catalog must hold at least one board.
    #[error("board catalog must contain at least one board")]
    NoBoards,
}
