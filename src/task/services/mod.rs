//! Application services for project and task lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    CreateProjectRequest, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
};
