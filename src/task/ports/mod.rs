//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the task store.

pub mod storage;

pub use storage::{TaskStorage, TaskStorageError, TaskStorageResult};

#[cfg(test)]
pub use storage::MockTaskStorage;
