//! In-memory board catalog repository.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::BoardCatalog,
    ports::{BoardCatalogRepository, BoardRepositoryError, BoardRepositoryResult},
};

/// Thread-safe in-memory board catalog repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardCatalogRepository {
    state: Arc<RwLock<Option<BoardCatalog>>>,
}

impl InMemoryBoardCatalogRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository that already holds `catalog`.
    #[must_use]
    pub fn with_catalog(catalog: BoardCatalog) -> Self {
        Self {
            state: Arc::new(RwLock::new(Some(catalog))),
        }
    }
}

fn lock_error(err: impl std::fmt::Display) -> BoardRepositoryError {
    BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl BoardCatalogRepository for InMemoryBoardCatalogRepository {
    async fn load(&self) -> BoardRepositoryResult<Option<BoardCatalog>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.clone())
    }

    async fn save(&self, catalog: &BoardCatalog) -> BoardRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        *state = Some(catalog.clone());
        Ok(())
    }
}
