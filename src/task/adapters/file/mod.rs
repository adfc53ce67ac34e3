//! File-backed storage adapter.
//!
//! Persists the task collection as a single JSON blob named after a fixed
//! key inside a capability-scoped directory.

mod storage;

pub use storage::{DEFAULT_STORAGE_KEY, FileTaskStorage};
