//! Read-only dashboard figures: column distribution, totals, progress, and
//! the due-date views.

use crate::board::{
    domain::{Board, MatchKind},
    ports::BoardCatalogRepository,
    services::{
        BoardManagementService, BoardServiceError,
        planning::{
            self, DayAgenda, PriorityMatrix, TOP_TRACKED_LIMIT, TaskEntry,
            UPCOMING_DEADLINE_LIMIT,
        },
    },
};
use crate::task::{
    domain::{Project, ProjectId, ProjectProgress, TaskStatus, rounded_percent},
    ports::{ProjectRepository, ProjectRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Number of tasks displayed under one board column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnShare {
    /// Column label.
    pub column: String,
    /// Tasks resolved to this column.
    pub count: usize,
    /// `count` as a rounded share of all tasks.
    pub percent: u32,
}

/// Progress of one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    /// Project identifier.
    pub project_id: ProjectId,
    /// Project name.
    pub name: String,
    /// Done-versus-total counts.
    pub progress: ProjectProgress,
}

/// Aggregated dashboard figures for a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceOverview {
    /// Number of projects.
    pub project_count: usize,
    /// Number of tasks across all projects.
    pub task_count: usize,
    /// Tasks not yet done.
    pub active_count: usize,
    /// Tasks in [`TaskStatus::InProgress`].
    pub in_progress_count: usize,
    /// Tasks with a running timer.
    pub running_timer_count: usize,
    /// Done tasks as a rounded share of all tasks.
    pub completion_percent: u32,
    /// Tracked seconds across all tasks, including running timers.
    pub tracked_seconds: u64,
    /// Tasks that fell back to the first column because no column matched
    /// their status.
    pub unmatched_count: usize,
    /// Per-column distribution for the board, in column order.
    pub columns: Vec<ColumnShare>,
    /// Per-project progress, in project order.
    pub projects: Vec<ProjectSummary>,
    /// Most-tracked tasks, most time first.
    pub top_tracked: Vec<TaskEntry>,
    /// Open tasks with the nearest due dates.
    pub upcoming_deadlines: Vec<TaskEntry>,
    /// Urgency/importance matrix.
    pub priority_matrix: PriorityMatrix,
    /// Tasks due on each of the next seven days.
    pub timeline: Vec<DayAgenda>,
}

impl WorkspaceOverview {
    /// Computes the overview of `projects` as displayed on `board` at `now`.
    #[must_use]
    pub fn build(projects: &[Project], board: &Board, now: DateTime<Utc>) -> Self {
        let tasks: Vec<_> = projects.iter().flat_map(Project::tasks).collect();
        let task_count = tasks.len();
        let done_count = tasks.iter().filter(|task| task.status().is_done()).count();
        let in_progress_count = tasks
            .iter()
            .filter(|task| task.status() == TaskStatus::InProgress)
            .count();

        let placements: Vec<_> = tasks
            .iter()
            .map(|task| board.match_column(task.status()))
            .collect();
        let columns = board
            .columns()
            .iter()
            .map(|column| {
                let count = placements
                    .iter()
                    .filter(|placement| placement.label == column.as_str())
                    .count();
                ColumnShare {
                    column: column.clone(),
                    count,
                    percent: rounded_percent(count, task_count),
                }
            })
            .collect();

        Self {
            project_count: projects.len(),
            task_count,
            active_count: task_count.saturating_sub(done_count),
            in_progress_count,
            running_timer_count: tasks.iter().filter(|task| task.is_running()).count(),
            completion_percent: rounded_percent(done_count, task_count),
            tracked_seconds: tasks
                .iter()
                .map(|task| task.tracked_seconds_at(now))
                .fold(0, u64::saturating_add),
            unmatched_count: placements
                .iter()
                .filter(|placement| placement.kind == MatchKind::Fallback)
                .count(),
            columns,
            projects: projects
                .iter()
                .map(|project| ProjectSummary {
                    project_id: project.id().clone(),
                    name: project.name().to_owned(),
                    progress: project.progress(),
                })
                .collect(),
            top_tracked: planning::top_tracked(projects, now, TOP_TRACKED_LIMIT),
            upcoming_deadlines: planning::upcoming_deadlines(
                projects,
                now,
                UPCOMING_DEADLINE_LIMIT,
            ),
            priority_matrix: PriorityMatrix::build(projects, now),
            timeline: planning::timeline(projects, now),
        }
    }
}

/// Errors returned while building an overview.
#[derive(Debug, Error)]
pub enum OverviewError {
    /// Loading the board catalog failed.
    #[error(transparent)]
    Boards(#[from] BoardServiceError),
    /// Loading projects failed.
    #[error(transparent)]
    Projects(#[from] ProjectRepositoryError),
}

/// Builds workspace overviews from stored projects and the selected board.
#[derive(Clone)]
pub struct OverviewService<P, B, C>
where
    P: ProjectRepository,
    B: BoardCatalogRepository,
    C: Clock + Send + Sync,
{
    projects: Arc<P>,
    boards: BoardManagementService<B>,
    clock: Arc<C>,
}

impl<P, B, C> OverviewService<P, B, C>
where
    P: ProjectRepository,
    B: BoardCatalogRepository,
    C: Clock + Send + Sync,
{
    /// Creates an overview service.
    #[must_use]
    pub const fn new(projects: Arc<P>, boards: BoardManagementService<B>, clock: Arc<C>) -> Self {
        Self {
            projects,
            boards,
            clock,
        }
    }

    /// Computes the overview for the selected board.
    ///
    /// # Errors
    ///
    /// Returns [`OverviewError`] when projects or boards cannot be loaded.
    pub async fn overview(&self) -> Result<WorkspaceOverview, OverviewError> {
        let projects = self.projects.list().await?;
        let board = self.boards.current_board().await?;
        Ok(WorkspaceOverview::build(&projects, &board, self.clock.utc()))
    }

    /// Returns the five-week calendar grid around the current week.
    ///
    /// # Errors
    ///
    /// Returns [`OverviewError::Projects`] when projects cannot be loaded.
    pub async fn calendar(&self) -> Result<Vec<DayAgenda>, OverviewError> {
        let projects = self.projects.list().await?;
        Ok(planning::calendar(&projects, self.clock.utc()))
    }
}
