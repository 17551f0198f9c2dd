//! Service layer for board creation, editing, selection and deletion.

use crate::board::{
    domain::{Board, BoardCatalog, BoardDomainError, BoardId, BoardSettings, parse_column_list},
    ports::{BoardCatalogRepository, BoardRepositoryError},
};
use crate::task::domain::TaskStatus;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBoardRequest {
    name: String,
    columns: Vec<String>,
}

impl CreateBoardRequest {
    /// Creates a request from a name and explicit column labels.
    #[must_use]
    pub fn new(name: impl Into<String>, columns: impl IntoIterator<Item = String>) -> Self {
        Self {
            name: name.into(),
            columns: columns.into_iter().collect(),
        }
    }

    /// Creates a request from a comma-separated column list such as
    /// `"To Do, In Progress, Done"`.
    #[must_use]
    pub fn from_column_list(name: impl Into<String>, columns: &str) -> Self {
        Self {
            name: name.into(),
            columns: parse_column_list(columns),
        }
    }
}

/// Service-level errors for board management.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation failed or a guard refused the operation.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] BoardRepositoryError),
}

impl BoardServiceError {
    /// Returns `true` when the operation was refused by the last-board or
    /// last-column guard.
    #[must_use]
    pub const fn is_guard_rejection(&self) -> bool {
        matches!(
            self,
            Self::Domain(BoardDomainError::LastBoard(_) | BoardDomainError::LastColumn(_))
        )
    }
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Board management orchestration service.
///
/// Every mutation loads the catalog, applies one change and saves the whole
/// catalog back. Rejected operations save nothing.
#[derive(Clone)]
pub struct BoardManagementService<R>
where
    R: BoardCatalogRepository,
{
    repository: Arc<R>,
    settings: BoardSettings,
}

impl<R> BoardManagementService<R>
where
    R: BoardCatalogRepository,
{
    /// Creates a board service with default settings.
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_settings(repository, BoardSettings::default())
    }

    /// Creates a board service with explicit settings.
    #[must_use]
    pub const fn with_settings(repository: Arc<R>, settings: BoardSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Returns the settings in use.
    #[must_use]
    pub const fn settings(&self) -> &BoardSettings {
        &self.settings
    }

    /// Returns the stored catalog.
    ///
    /// An empty store is seeded with a catalog holding only the default board,
    /// so the default board keeps its identifier across calls.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError`] when loading or seeding fails or the
    /// configured default board is invalid.
    pub async fn catalog(&self) -> BoardServiceResult<BoardCatalog> {
        if let Some(catalog) = self.repository.load().await? {
            return Ok(catalog);
        }
        let catalog = BoardCatalog::from_settings(&self.settings)?;
        self.repository.save(&catalog).await?;
        debug!(board_id = %catalog.selected_id(), "seeded board catalog with default board");
        Ok(catalog)
    }

    /// Returns the selected board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError`] when the catalog cannot be loaded.
    pub async fn current_board(&self) -> BoardServiceResult<Board> {
        Ok(self.catalog().await?.current_board().clone())
    }

    /// Returns the column of the selected board a task with `status` is
    /// displayed under.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError`] when the catalog cannot be loaded.
    pub async fn column_for_status(&self, status: TaskStatus) -> BoardServiceResult<String> {
        let catalog = self.catalog().await?;
        Ok(catalog.current_board().resolve_column(status).to_owned())
    }

    /// Creates a board and appends it to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for a blank name or an empty
    /// column list, or [`BoardServiceError::Repository`] when saving fails.
    pub async fn create_board(&self, request: CreateBoardRequest) -> BoardServiceResult<Board> {
        let CreateBoardRequest { name, columns } = request;
        let board = Board::new(name, columns)?;
        let created = board.clone();
        self.mutate(|catalog| Ok(catalog.add_board(board))).await?;
        info!(board_id = %created.id(), name = created.name(), "board created");
        Ok(created)
    }

    /// Replaces the name and columns of a board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for an unknown board or invalid
    /// input.
    pub async fn edit_board(
        &self,
        board_id: &BoardId,
        name: impl Into<String> + Send,
        columns: Vec<String>,
    ) -> BoardServiceResult<Board> {
        let updated = self
            .mutate(|catalog| {
                catalog.edit_board(board_id, name, columns)?;
                catalog.board_mut(board_id).map(|board| board.clone())
            })
            .await?;
        info!(board_id = %board_id, "board edited");
        Ok(updated)
    }

    /// Deletes a board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] wrapping
    /// [`BoardDomainError::LastBoard`] when the board is the only one; the
    /// stored catalog is left untouched.
    pub async fn delete_board(&self, board_id: &BoardId) -> BoardServiceResult<Board> {
        let removed = self
            .mutate(|catalog| catalog.delete_board(board_id))
            .await
            .inspect_err(|err| {
                if err.is_guard_rejection() {
                    warn!(board_id = %board_id, "refused to delete the last board");
                }
            })?;
        info!(board_id = %board_id, "board deleted");
        Ok(removed)
    }

    /// Selects the board tasks are displayed on.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for an unknown board.
    pub async fn select_board(&self, board_id: &BoardId) -> BoardServiceResult<()> {
        self.mutate(|catalog| catalog.select_board(board_id)).await?;
        debug!(board_id = %board_id, "board selected");
        Ok(())
    }

    /// Appends a column to a board and returns its index.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for an unknown board or a blank
    /// label.
    pub async fn add_column(
        &self,
        board_id: &BoardId,
        label: impl Into<String> + Send,
    ) -> BoardServiceResult<usize> {
        self.mutate(|catalog| catalog.board_mut(board_id)?.add_column(label))
            .await
    }

    /// Renames a column, returning whether anything changed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for an unknown board or column.
    pub async fn rename_column(
        &self,
        board_id: &BoardId,
        index: usize,
        label: impl Into<String> + Send,
    ) -> BoardServiceResult<bool> {
        self.mutate(|catalog| catalog.board_mut(board_id)?.rename_column(index, label))
            .await
    }

    /// Moves a column one position to the left.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for an unknown board or column.
    pub async fn move_column_left(
        &self,
        board_id: &BoardId,
        index: usize,
    ) -> BoardServiceResult<bool> {
        self.mutate(|catalog| catalog.board_mut(board_id)?.move_column_left(index))
            .await
    }

    /// Moves a column one position to the right.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for an unknown board or column.
    pub async fn move_column_right(
        &self,
        board_id: &BoardId,
        index: usize,
    ) -> BoardServiceResult<bool> {
        self.mutate(|catalog| catalog.board_mut(board_id)?.move_column_right(index))
            .await
    }

    /// Removes a column and returns its label.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] wrapping
    /// [`BoardDomainError::LastColumn`] when it is the only column; the stored
    /// catalog is left untouched.
    pub async fn remove_column(
        &self,
        board_id: &BoardId,
        index: usize,
    ) -> BoardServiceResult<String> {
        let removed = self
            .mutate(|catalog| catalog.board_mut(board_id)?.remove_column(index))
            .await
            .inspect_err(|err| {
                if err.is_guard_rejection() {
                    warn!(board_id = %board_id, "refused to delete the last column");
                }
            })?;
        info!(board_id = %board_id, column = %removed, "column removed");
        Ok(removed)
    }

    /// Applies one change to the catalog and saves it when the change
    /// succeeds.
    async fn mutate<T>(
        &self,
        change: impl FnOnce(&mut BoardCatalog) -> Result<T, BoardDomainError> + Send,
    ) -> BoardServiceResult<T> {
        let mut catalog = self.catalog().await?;
        let outcome = change(&mut catalog)?;
        self.repository.save(&catalog).await?;
        Ok(outcome)
    }
}
