//! Project aggregate owning an ordered list of tasks.

use super::{ProjectId, Task, TaskDomainError, TaskId, TaskStatus, task::non_empty};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Colour token assigned to projects created without one.
pub const DEFAULT_PROJECT_COLOR: &str = "bg-blue-500";

/// Project grouping tasks under a name and colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    #[serde(default)]
    description: String,
    color: String,
    #[serde(default)]
    tasks: Vec<Task>,
}

impl Project {
    /// Creates an empty project.
    ///
    /// A blank colour falls back to [`DEFAULT_PROJECT_COLOR`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyProjectName`] when the name is empty
    /// after trimming.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<Self, TaskDomainError> {
        let validated_name = non_empty(name.into()).ok_or(TaskDomainError::EmptyProjectName)?;
        let color_token =
            non_empty(color.into()).unwrap_or_else(|| DEFAULT_PROJECT_COLOR.to_owned());
        Ok(Self {
            id: ProjectId::new(),
            name: validated_name,
            description: description.into().trim().to_owned(),
            color: color_token,
            tasks: Vec::new(),
        })
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> &ProjectId {
        &self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the colour token.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the tasks in creation order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Renames the project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyProjectName`] when the name is empty
    /// after trimming.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), TaskDomainError> {
        self.name = non_empty(name.into()).ok_or(TaskDomainError::EmptyProjectName)?;
        Ok(())
    }

    /// Appends a new backlog task and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskTitle`] when the title is empty
    /// after trimming.
    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<TaskId, TaskDomainError> {
        let task = Task::new(title, clock)?;
        let id = task.id().clone();
        self.tasks.push(task);
        Ok(id)
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Looks up a task for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TaskNotFound`] when the task does not belong
    /// to this project.
    pub fn task_mut(&mut self, task_id: &TaskId) -> Result<&mut Task, TaskDomainError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id() == task_id)
            .ok_or_else(|| TaskDomainError::TaskNotFound(task_id.clone()))
    }

    /// Removes a task and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TaskNotFound`] when the task does not belong
    /// to this project.
    pub fn remove_task(&mut self, task_id: &TaskId) -> Result<Task, TaskDomainError> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id() == task_id)
            .ok_or_else(|| TaskDomainError::TaskNotFound(task_id.clone()))?;
        Ok(self.tasks.remove(position))
    }

    /// Anchors every running timer without a start instant at `now`,
    /// returning how many were anchored.
    pub fn resume_timers(&mut self, now: DateTime<Utc>) -> usize {
        self.tasks
            .iter_mut()
            .map(|task| usize::from(task.resume_timer(now)))
            .sum()
    }

    /// Summarises how many tasks are done.
    #[must_use]
    pub fn progress(&self) -> ProjectProgress {
        let done = self
            .tasks
            .iter()
            .filter(|task| task.status() == TaskStatus::Done)
            .count();
        ProjectProgress::new(done, self.tasks.len())
    }
}

/// Completed-versus-total task counts for one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectProgress {
    /// Tasks in [`TaskStatus::Done`].
    pub done: usize,
    /// All tasks in the project.
    pub total: usize,
    /// `done / total` as a rounded whole percentage, `0` for empty projects.
    pub percent: u32,
}

impl ProjectProgress {
    /// Builds a progress summary from raw counts.
    #[must_use]
    pub fn new(done: usize, total: usize) -> Self {
        Self {
            done,
            total,
            percent: rounded_percent(done, total),
        }
    }
}

/// Returns `part / whole` as a whole percentage rounded half up.
///
/// An empty `whole` yields `0`.
#[must_use]
pub fn rounded_percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let scaled = part
        .saturating_mul(200)
        .saturating_add(whole)
        .div_euclid(whole.saturating_mul(2));
    u32::try_from(scaled).unwrap_or(u32::MAX)
}
