//! In-memory project repository for tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Project, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};

/// Thread-safe in-memory project repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<InMemoryProjectState>>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    projects: HashMap<ProjectId, Project>,
    order: Vec<ProjectId>,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `projects` in the given order.
    #[must_use]
    pub fn with_projects(projects: impl IntoIterator<Item = Project>) -> Self {
        let mut state = InMemoryProjectState::default();
        for project in projects {
            let id = project.id().clone();
            if !state.projects.contains_key(&id) {
                state.order.push(id.clone());
            }
            state.projects.insert(id, project);
        }
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }
}

fn lock_error(err: impl std::fmt::Display) -> ProjectRepositoryError {
    ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn store(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let id = project.id();
        if state.projects.contains_key(id) {
            return Err(ProjectRepositoryError::DuplicateProject(id.clone()));
        }
        state.projects.insert(id.clone(), project.clone());
        state.order.push(id.clone());
        Ok(())
    }

    async fn update(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state
            .projects
            .get_mut(project.id())
            .ok_or_else(|| ProjectRepositoryError::NotFound(project.id().clone()))?;
        *stored = project.clone();
        Ok(())
    }

    async fn remove(&self, id: &ProjectId) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state
            .projects
            .remove(id)
            .ok_or_else(|| ProjectRepositoryError::NotFound(id.clone()))?;
        state.order.retain(|stored_id| stored_id != id);
        Ok(())
    }

    async fn find_by_id(&self, id: &ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.projects.get(id).cloned())
    }

    async fn list(&self) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .order
            .iter()
            .filter_map(|id| state.projects.get(id).cloned())
            .collect())
    }
}
