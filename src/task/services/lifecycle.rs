//! Service layer for project and task management.

use crate::board::domain::{BoardSettings, UnmatchedColumnPolicy, resolve_status_with};
use crate::task::{
    domain::{
        DEFAULT_PROJECT_COLOR, Project, ProjectId, SubtaskId, Task, TaskDomainError, TaskId,
        TaskStatus,
    },
    ports::{ProjectRepository, ProjectRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
    description: String,
    color: String,
}

impl CreateProjectRequest {
    /// Creates a request with the required project name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            color: DEFAULT_PROJECT_COLOR.to_owned(),
        }
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the project colour token.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// Service-level errors for project and task operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
    /// The project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Project and task orchestration service.
///
/// Each operation loads one project, applies a single change and stores the
/// whole project back.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    unmatched_column_policy: UnmatchedColumnPolicy,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service that resets tasks moved to an
    /// unrecognised column back to the backlog.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            unmatched_column_policy: UnmatchedColumnPolicy::ResetToBacklog,
        }
    }

    /// Sets the policy applied when a task is moved to an unrecognised column.
    #[must_use]
    pub const fn with_unmatched_column_policy(mut self, policy: UnmatchedColumnPolicy) -> Self {
        self.unmatched_column_policy = policy;
        self
    }

    /// Applies the status-writing parts of the board settings.
    #[must_use]
    pub const fn with_settings(self, settings: &BoardSettings) -> Self {
        self.with_unmatched_column_policy(settings.unmatched_column_policy)
    }

    /// Returns the policy applied when a task is moved to an unrecognised
    /// column.
    #[must_use]
    pub const fn unmatched_column_policy(&self) -> UnmatchedColumnPolicy {
        self.unmatched_column_policy
    }

    /// Creates an empty project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when the name is blank or persistence
    /// fails.
    pub async fn create_project(
        &self,
        request: CreateProjectRequest,
    ) -> TaskLifecycleResult<Project> {
        let CreateProjectRequest {
            name,
            description,
            color,
        } = request;
        let project = Project::new(name, description, color)?;
        self.repository.store(&project).await?;
        info!(project_id = %project.id(), name = project.name(), "project created");
        Ok(project)
    }

    /// Deletes a project together with all of its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the project does not
    /// exist or persistence fails.
    pub async fn delete_project(&self, project_id: &ProjectId) -> TaskLifecycleResult<()> {
        self.repository.remove(project_id).await?;
        info!(project_id = %project_id, "project deleted");
        Ok(())
    }

    /// Renames a project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] for an unknown project or a blank name.
    pub async fn rename_project(
        &self,
        project_id: &ProjectId,
        name: impl Into<String> + Send,
    ) -> TaskLifecycleResult<Project> {
        let mut project = self.load_project(project_id).await?;
        project.rename(name)?;
        self.repository.update(&project).await?;
        Ok(project)
    }

    /// Returns a project by identifier.
    ///
    /// Returns `Ok(None)` when the project does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn find_project(&self, project_id: &ProjectId) -> TaskLifecycleResult<Option<Project>> {
        Ok(self.repository.find_by_id(project_id).await?)
    }

    /// Returns every project in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn list_projects(&self) -> TaskLifecycleResult<Vec<Project>> {
        Ok(self.repository.list().await?)
    }

    /// Adds a backlog task to a project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] for an unknown project or a blank title.
    pub async fn add_task(
        &self,
        project_id: &ProjectId,
        title: impl Into<String> + Send,
    ) -> TaskLifecycleResult<Task> {
        let mut project = self.load_project(project_id).await?;
        let task_id = project.add_task(title, &*self.clock)?;
        let task = project
            .task(&task_id)
            .cloned()
            .ok_or_else(|| TaskDomainError::TaskNotFound(task_id.clone()))?;
        self.repository.update(&project).await?;
        info!(project_id = %project_id, task_id = %task_id, "task added");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] for an unknown project or task.
    pub async fn delete_task(
        &self,
        project_id: &ProjectId,
        task_id: &TaskId,
    ) -> TaskLifecycleResult<Task> {
        let mut project = self.load_project(project_id).await?;
        let removed = project.remove_task(task_id)?;
        self.repository.update(&project).await?;
        info!(project_id = %project_id, task_id = %task_id, "task deleted");
        Ok(removed)
    }

    /// Renames a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] for an unknown project or task or a
    /// blank title.
    pub async fn rename_task(
        &self,
        project_id: &ProjectId,
        task_id: &TaskId,
        title: impl Into<String> + Send,
    ) -> TaskLifecycleResult<Task> {
        self.modify_task(project_id, task_id, |task| task.rename(title))
            .await
            .map(|(task, ())| task)
    }

    /// Sets or clears the assignee of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] for an unknown project or task.
    pub async fn assign_task(
        &self,
        project_id: &ProjectId,
        task_id: &TaskId,
        assignee: Option<String>,
    ) -> TaskLifecycleResult<Task> {
        self.modify_task(project_id, task_id, |task| {
            task.assign(assignee);
            Ok(())
        })
        .await
        .map(|(task, ())| task)
    }

    /// Sets or clears the due date of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] for an unknown project or task.
    pub async fn set_due_date(
        &self,
        project_id: &ProjectId,
        task_id: &TaskId,
        due: Option<NaiveDate>,
    ) -> TaskLifecycleResult<Task> {
        self.modify_task(project_id, task_id, |task| {
            task.set_due(due);
            Ok(())
        })
        .await
        .map(|(task, ())| task)
    }

    /// Stores a canonical status chosen directly by the user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] for an unknown project or task.
    pub async fn set_status(
        &self,
        project_id: &ProjectId,
        task_id: &TaskId,
        status: TaskStatus,
    ) -> TaskLifecycleResult<Task> {
        let (task, changed) = self
            .modify_task(project_id, task_id, |task| Ok(task.set_status(status)))
            .await?;
        if changed {
            info!(task_id = %task_id, status = %status, "task status changed");
        }
        Ok(task)
    }

    /// Moves a task to a board column, storing the status the column maps to.
    ///
    /// Canonical labels and known aliases map to their status; any other
    /// label is handled by the configured [`UnmatchedColumnPolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] for an unknown project or task.
    pub async fn move_to_column(
        &self,
        project_id: &ProjectId,
        task_id: &TaskId,
        column: &str,
    ) -> TaskLifecycleResult<Task> {
        let policy = self.unmatched_column_policy;
        let (task, changed) = self
            .modify_task(project_id, task_id, |task| {
                let status = resolve_status_with(column, task.status(), policy);
                Ok(task.set_status(status))
            })
            .await?;
        info!(
            task_id = %task_id,
            column,
            status = %task.status(),
            changed,
            "task moved to column"
        );
        Ok(task)
    }

    /// Adds an open subtask.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] for an unknown project or task or a
    /// blank title.
    pub async fn add_subtask(
        &self,
        project_id: &ProjectId,
        task_id: &TaskId,
        title: impl Into<String> + Send,
    ) -> TaskLifecycleResult<(Task, SubtaskId)> {
        self.modify_task(project_id, task_id, |task| task.add_subtask(title))
            .await
    }

    /// Flips the completion flag of a subtask.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] for an unknown project, task or subtask.
    pub async fn toggle_subtask(
        &self,
        project_id: &ProjectId,
        task_id: &TaskId,
        subtask_id: &SubtaskId,
    ) -> TaskLifecycleResult<Task> {
        self.modify_task(project_id, task_id, |task| task.toggle_subtask(subtask_id))
            .await
            .map(|(task, _)| task)
    }

    /// Removes a subtask.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] for an unknown project, task or subtask.
    pub async fn delete_subtask(
        &self,
        project_id: &ProjectId,
        task_id: &TaskId,
        subtask_id: &SubtaskId,
    ) -> TaskLifecycleResult<Task> {
        self.modify_task(project_id, task_id, |task| task.remove_subtask(subtask_id))
            .await
            .map(|(task, _)| task)
    }

    /// Starts a stopped timer or stops a running one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] for an unknown project or task.
    pub async fn toggle_timer(
        &self,
        project_id: &ProjectId,
        task_id: &TaskId,
    ) -> TaskLifecycleResult<Task> {
        let clock = Arc::clone(&self.clock);
        let (task, running) = self
            .modify_task(project_id, task_id, |task| Ok(task.toggle_timer(&*clock)))
            .await?;
        debug!(task_id = %task_id, running, "task timer toggled");
        Ok(task)
    }

    async fn load_project(&self, project_id: &ProjectId) -> TaskLifecycleResult<Project> {
        self.repository
            .find_by_id(project_id)
            .await?
            .ok_or_else(|| TaskLifecycleError::ProjectNotFound(project_id.clone()))
    }

    /// Applies one change to a task and stores the owning project.
    async fn modify_task<T>(
        &self,
        project_id: &ProjectId,
        task_id: &TaskId,
        change: impl FnOnce(&mut Task) -> Result<T, TaskDomainError> + Send,
    ) -> TaskLifecycleResult<(Task, T)> {
        let mut project = self.load_project(project_id).await?;
        let task = project.task_mut(task_id)?;
        let outcome = change(task)?;
        let updated = task.clone();
        self.repository.update(&project).await?;
        Ok((updated, outcome))
    }
}
