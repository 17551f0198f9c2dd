//! Board catalog: the non-empty board collection and the selected board.

use super::{Board, BoardDomainError, BoardId, BoardSettings};
use std::iter;

/// Ordered, non-empty collection of boards with one board selected.
///
/// The first board is held apart from the rest so the catalog can never be
/// emptied; deleting the only board is refused with
/// [`BoardDomainError::LastBoard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCatalog {
    first: Board,
    rest: Vec<Board>,
    selected: BoardId,
}

impl BoardCatalog {
    /// Creates a catalog holding a single, selected board.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            selected: board.id().clone(),
            first: board,
            rest: Vec::new(),
        }
    }

    /// Creates a catalog holding the default board from `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError`] when the configured default board is
    /// invalid.
    pub fn from_settings(settings: &BoardSettings) -> Result<Self, BoardDomainError> {
        Ok(Self::new(settings.default_board()?))
    }

    /// Rebuilds a catalog from stored boards.
    ///
    /// An unknown or missing `selected` identifier selects the first board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::NoBoards`] when `boards` is empty.
    pub fn from_boards(
        boards: impl IntoIterator<Item = Board>,
        selected: Option<BoardId>,
    ) -> Result<Self, BoardDomainError> {
        let mut remaining = boards.into_iter();
        let first = remaining.next().ok_or(BoardDomainError::NoBoards)?;
        let mut catalog = Self::new(first);
        catalog.rest = remaining.collect();
        if let Some(id) = selected.filter(|id| catalog.board(id).is_some()) {
            catalog.selected = id;
        }
        Ok(catalog)
    }

    /// Iterates over boards in display order.
    pub fn boards(&self) -> impl Iterator<Item = &Board> {
        iter::once(&self.first).chain(self.rest.iter())
    }

    /// Returns the number of boards (always at least one).
    #[must_use]
    pub fn board_count(&self) -> usize {
        self.rest.len().saturating_add(1)
    }

    /// Returns the identifier of the selected board.
    #[must_use]
    pub const fn selected_id(&self) -> &BoardId {
        &self.selected
    }

    /// Returns the selected board, or the first board if the selection is
    /// stale.
    #[must_use]
    pub fn current_board(&self) -> &Board {
        self.board(&self.selected).unwrap_or(&self.first)
    }

    /// Looks up a board by identifier.
    #[must_use]
    pub fn board(&self, id: &BoardId) -> Option<&Board> {
        self.boards().find(|board| board.id() == id)
    }

    /// Looks up a board for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::BoardNotFound`] for an unknown identifier.
    pub fn board_mut(&mut self, id: &BoardId) -> Result<&mut Board, BoardDomainError> {
        iter::once(&mut self.first)
            .chain(self.rest.iter_mut())
            .find(|board| board.id() == id)
            .ok_or_else(|| BoardDomainError::BoardNotFound(id.clone()))
    }

    /// Appends a board and returns its identifier. The selection is kept.
    pub fn add_board(&mut self, board: Board) -> BoardId {
        let id = board.id().clone();
        self.rest.push(board);
        id
    }

    /// Replaces the name and columns of a board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::BoardNotFound`] for an unknown identifier
    /// or the validation errors of [`Board::edit`].
    pub fn edit_board<I, S>(
        &mut self,
        id: &BoardId,
        name: impl Into<String>,
        columns: I,
    ) -> Result<(), BoardDomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.board_mut(id)?.edit(name, columns)
    }

    /// Selects a board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::BoardNotFound`] for an unknown identifier.
    pub fn select_board(&mut self, id: &BoardId) -> Result<(), BoardDomainError> {
        if self.board(id).is_none() {
            return Err(BoardDomainError::BoardNotFound(id.clone()));
        }
        self.selected = id.clone();
        Ok(())
    }

    /// Deletes a board and returns it.
    ///
    /// When the deleted board was selected, the first remaining board becomes
    /// selected.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::BoardNotFound`] for an unknown identifier
    /// or [`BoardDomainError::LastBoard`] when it is the only board. The
    /// catalog is unchanged on error.
    pub fn delete_board(&mut self, id: &BoardId) -> Result<Board, BoardDomainError> {
        if self.board(id).is_none() {
            return Err(BoardDomainError::BoardNotFound(id.clone()));
        }
        if self.rest.is_empty() {
            return Err(BoardDomainError::LastBoard(id.clone()));
        }

        let removed = if self.first.id() == id {
            let promoted = self.rest.remove(0);
            std::mem::replace(&mut self.first, promoted)
        } else {
            let position = self
                .rest
                .iter()
                .position(|board| board.id() == id)
                .ok_or_else(|| BoardDomainError::BoardNotFound(id.clone()))?;
            self.rest.remove(position)
        };

        if self.selected == *id {
            self.selected = self.first.id().clone();
        }
        Ok(removed)
    }

    /// Consumes the catalog, returning boards in display order.
    #[must_use]
    pub fn into_boards(self) -> Vec<Board> {
        iter::once(self.first).chain(self.rest).collect()
    }
}
