//! Adapter implementations for task context ports.

pub mod memory;
