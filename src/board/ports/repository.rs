//! Repository port for the board catalog.

use crate::board::domain::BoardCatalog;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board catalog repository operations.
pub type BoardRepositoryResult<T> = Result<T, BoardRepositoryError>;

/// Board catalog persistence contract.
///
/// The catalog is saved whole after each mutation; concurrent writers
/// overwrite each other.
#[async_trait]
pub trait BoardCatalogRepository: Send + Sync {
    /// Loads the stored catalog.
    ///
    /// Returns `None` when nothing has been saved yet.
    async fn load(&self) -> BoardRepositoryResult<Option<BoardCatalog>>;

    /// Replaces the stored catalog.
    async fn save(&self, catalog: &BoardCatalog) -> BoardRepositoryResult<()>;
}

/// Errors returned by board catalog repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
