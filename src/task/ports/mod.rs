//! Port contracts for project and task management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod repository;

pub use repository::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult};
