//! Project and task management.
//!
//! Tasks live inside projects and carry one of four canonical statuses
//! ([`domain::TaskStatus`]). Board placement is derived from that status by
//! [`crate::board`]; nothing here depends on a particular board. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
