//! Kanban boards and status/column reconciliation.
//!
//! A board is a named, ordered list of column labels. Tasks are placed on a
//! board by projecting their canonical status onto its columns, and moved by
//! mapping a chosen column label back onto a status. The module follows the
//! same layering as [`crate::task`]:
//!
//! - Domain types and the resolver in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
