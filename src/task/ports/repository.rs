//! Repository port for project persistence and lookup.

use crate::task::domain::{Project, ProjectId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project persistence contract.
///
/// Projects are stored whole: every mutation replaces the stored aggregate,
/// so the last write wins.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores a new project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::DuplicateProject`] when the project
    /// ID already exists.
    async fn store(&self, project: &Project) -> ProjectRepositoryResult<()>;

    /// Replaces an existing project, including its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project does not
    /// exist.
    async fn update(&self, project: &Project) -> ProjectRepositoryResult<()>;

    /// Removes a project and all of its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project does not
    /// exist.
    async fn remove(&self, id: &ProjectId) -> ProjectRepositoryResult<()>;

    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    async fn find_by_id(&self, id: &ProjectId) -> ProjectRepositoryResult<Option<Project>>;

    /// Returns every project in creation order.
    async fn list(&self) -> ProjectRepositoryResult<Vec<Project>>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// A project with the same identifier already exists.
    #[error("duplicate project identifier: {0}")]
    DuplicateProject(ProjectId),

    /// The project was not found.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
