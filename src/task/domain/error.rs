//! Error types for task domain validation and parsing.

use super::{SubtaskId, TaskId};
use thiserror::Error;

/// Errors returned while constructing or mutating task domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The subtask title is empty after trimming.
    #[error("subtask title must not be empty")]
    EmptySubtaskTitle,

    /// The task does not belong to the project.
    #[error("task not found in project: {0}")]
    TaskNotFound(TaskId),

    /// The subtask does not belong to the task.
    #[error("subtask not found: {0}")]
    SubtaskNotFound(SubtaskId),
}

/// Error returned while parsing task statuses from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
