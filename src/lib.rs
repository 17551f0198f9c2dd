//! Projectboard: projects, tasks, and kanban boards for a workspace app.
//!
//! Tasks carry one of four canonical statuses. Boards are user-defined,
//! ordered column lists used purely for display: a task's column is
//! recomputed from its status on every render, and moving a task to a column
//! writes a canonical status back.
//!
//! # Architecture
//!
//! Projectboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (in-memory)
//! - **Services**: Orchestration of domain changes and persistence
//!
//! # Modules
//!
//! - [`task`]: Projects, tasks, subtasks, time tracking, status vocabulary
//! - [`board`]: Boards, the board catalog, and status/column reconciliation
//! - [`workspace`]: The stored workspace document

pub mod board;
pub mod task;
pub mod workspace;
