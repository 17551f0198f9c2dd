//! Serialisable snapshot of projects, boards, and the selected board.

use crate::board::domain::{Board, BoardCatalog, BoardDomainError, BoardId, BoardSettings};
use crate::task::domain::Project;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application name the snapshot is stored under.
pub const APP_NAME: &str = "projects";

/// Item key the snapshot is stored under.
pub const ITEM_KEY: &str = "state";

/// Errors raised while encoding, decoding, or restoring a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The JSON document could not be encoded or decoded.
    #[error("invalid workspace document: {0}")]
    Json(#[from] serde_json::Error),
    /// The default board configured for empty snapshots is invalid.
    #[error(transparent)]
    Board(#[from] BoardDomainError),
}

/// Whole-workspace document: `{ "projects": [...], "boards": [...],
/// "selectedBoard": "..." }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSnapshot {
    /// Projects with their tasks.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Boards in display order.
    #[serde(default)]
    pub boards: Vec<Board>,
    /// Selected board, if any was stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_board: Option<BoardId>,
}

impl WorkspaceSnapshot {
    /// Captures the current projects and board catalog.
    #[must_use]
    pub fn capture(projects: Vec<Project>, catalog: &BoardCatalog) -> Self {
        Self {
            projects,
            boards: catalog.boards().cloned().collect(),
            selected_board: Some(catalog.selected_id().clone()),
        }
    }

    /// Splits the snapshot into projects and a board catalog.
    ///
    /// An empty board list yields the default board from `settings`; an
    /// unknown selection selects the first board. Timers stored as running
    /// without a start instant resume from the current time.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Board`] when the default board from
    /// `settings` is needed and invalid.
    pub fn into_parts(
        self,
        settings: &BoardSettings,
        clock: &impl Clock,
    ) -> Result<(Vec<Project>, BoardCatalog), SnapshotError> {
        let catalog = if self.boards.is_empty() {
            BoardCatalog::from_settings(settings)?
        } else {
            BoardCatalog::from_boards(self.boards, self.selected_board)?
        };
        let now = clock.utc();
        let mut projects = self.projects;
        for project in &mut projects {
            project.resume_timers(now);
        }
        Ok((projects, catalog))
    }

    /// Decodes a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] for malformed documents, including
    /// boards with no columns or a blank name.
    pub fn from_json(document: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(document)?)
    }

    /// Encodes the snapshot as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] when encoding fails.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }
}
