//! Adapter implementations of the task storage port.

pub mod file;
pub mod memory;
