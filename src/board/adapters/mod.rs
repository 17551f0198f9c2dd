//! Adapter implementations for board context ports.

pub mod memory;
