//! Step definitions for board column BDD scenarios.

mod given;
mod then;
mod when;
pub mod world;
