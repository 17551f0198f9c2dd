//! Domain model for boards and status/column reconciliation.
//!
//! Boards are display groupings only. A task's placement on a board is
//! recomputed from its canonical status every time it is shown, and moving a
//! task to a column writes a canonical status back.

mod board;
mod catalog;
mod error;
mod ids;
mod resolver;
mod settings;

pub use board::{Board, parse_column_list};
pub use catalog::BoardCatalog;
pub use error::BoardDomainError;
pub use ids::BoardId;
pub use resolver::{
    ColumnMatch, MatchKind, match_column, resolve_column, resolve_status, resolve_status_with,
};
pub use settings::{BoardSettings, DEFAULT_BOARD_NAME, UnmatchedColumnPolicy};
