//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use projectboard::{
    board::{adapters::memory::InMemoryBoardCatalogRepository, services::BoardManagementService},
    task::{adapters::memory::InMemoryProjectRepository, services::TaskLifecycleService},
};
use rstest::fixture;

/// Task service over an in-memory project repository.
pub type ProjectService = TaskLifecycleService<InMemoryProjectRepository, DefaultClock>;

/// Board service over an in-memory catalog repository.
pub type BoardService = BoardManagementService<InMemoryBoardCatalogRepository>;

/// Services sharing one in-memory workspace.
pub struct Workspace {
    pub projects: Arc<InMemoryProjectRepository>,
    pub project_service: ProjectService,
    pub board_service: BoardService,
}

/// Provides a fresh in-memory workspace for each test.
#[fixture]
pub fn workspace() -> Workspace {
    let projects = Arc::new(InMemoryProjectRepository::new());
    Workspace {
        project_service: TaskLifecycleService::new(Arc::clone(&projects), Arc::new(DefaultClock)),
        board_service: BoardManagementService::new(Arc::new(
            InMemoryBoardCatalogRepository::new(),
        )),
        projects,
    }
}
