//! Domain model for projects, tasks, and the canonical status vocabulary.
//!
//! Tasks carry one of four canonical statuses. Everything else on a task
//! (assignee, due date, subtasks, tracked time) is bookkeeping with no
//! cross-entity invariants.

mod error;
mod ids;
mod project;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{ProjectId, SubtaskId, TaskId};
pub use project::{DEFAULT_PROJECT_COLOR, Project, ProjectProgress, rounded_percent};
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Subtask, Task, format_hms};
