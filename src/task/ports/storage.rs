//! Storage port for loading and saving the task collection.
//!
//! The collaborator deals in whole collections only: every save transmits
//! the full list, so a later save always supersedes an earlier one.

use crate::task::domain::Task;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task storage operations.
pub type TaskStorageResult<T> = Result<T, TaskStorageError>;

/// Task persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStorage: Send + Sync {
    /// Loads the stored task collection.
    ///
    /// An empty or missing store yields an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStorageError`] when the stored blob cannot be read or
    /// decoded.
    async fn load(&self) -> TaskStorageResult<Vec<Task>>;

    /// Replaces the stored collection with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStorageError`] when the blob cannot be encoded or
    /// written.
    async fn save(&self, tasks: &[Task]) -> TaskStorageResult<()>;

    /// Removes the stored collection. Clearing an empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStorageError`] when the blob exists but cannot be
    /// removed.
    async fn clear(&self) -> TaskStorageResult<()>;
}

/// Errors returned by task storage implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStorageError {
    /// Reading or writing the backing medium failed.
    #[error("storage I/O error: {0}")]
    Io(Arc<std::io::Error>),

    /// The stored blob could not be encoded or decoded.
    #[error("storage serialization error: {0}")]
    Serialization(Arc<serde_json::Error>),

    /// Any other persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStorageError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<std::io::Error> for TaskStorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

impl From<serde_json::Error> for TaskStorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(Arc::new(err))
    }
}
