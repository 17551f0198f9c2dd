//! Shared world state for board column BDD scenarios.

use std::sync::Arc;

use projectboard::{
    board::{
        adapters::memory::InMemoryBoardCatalogRepository,
        domain::BoardId,
        services::{BoardManagementService, BoardServiceError},
    },
    task::{
        adapters::memory::InMemoryProjectRepository,
        domain::{ProjectId, TaskId},
        services::TaskLifecycleService,
    },
};
use mockable::DefaultClock;
use rstest::fixture;

/// Board service type used by the BDD world.
pub type TestBoardService = BoardManagementService<InMemoryBoardCatalogRepository>;

/// Task service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemoryProjectRepository, DefaultClock>;

/// Scenario world for board column behaviour tests.
pub struct BoardColumnWorld {
    pub boards: TestBoardService,
    pub tasks: TestTaskService,
    /// Boards created by `Given` steps, replacing the seeded default on first
    /// use.
    pub created_boards: Vec<BoardId>,
    pub task_ref: Option<(ProjectId, TaskId)>,
    pub last_board_error: Option<BoardServiceError>,
}

impl BoardColumnWorld {
    /// Creates a world with empty repositories.
    #[must_use]
    pub fn new() -> Self {
        Self {
            boards: BoardManagementService::new(Arc::new(InMemoryBoardCatalogRepository::new())),
            tasks: TaskLifecycleService::new(
                Arc::new(InMemoryProjectRepository::new()),
                Arc::new(DefaultClock),
            ),
            created_boards: Vec::new(),
            task_ref: None,
            last_board_error: None,
        }
    }
}

impl Default for BoardColumnWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardColumnWorld {
    BoardColumnWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
