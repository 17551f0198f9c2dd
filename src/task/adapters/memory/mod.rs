//! In-memory adapters for the task context.

mod project;

pub use project::InMemoryProjectRepository;
