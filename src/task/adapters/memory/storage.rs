//! Ephemeral task storage with failure injection.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::Task,
    ports::{TaskStorage, TaskStorageError, TaskStorageResult},
};

/// Thread-safe in-memory task storage.
///
/// Clones share the same backing state, so a test can keep a handle while
/// the store owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStorage {
    state: Arc<RwLock<InMemoryStorageState>>,
}

#[derive(Debug, Default)]
struct InMemoryStorageState {
    tasks: Vec<Task>,
    load_failure: Option<String>,
    save_failure: Option<String>,
    save_count: usize,
}

impl InMemoryTaskStorage {
    /// Creates an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-populated with `tasks`.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let storage = Self::default();
        if let Ok(mut state) = storage.state.write() {
            state.tasks = tasks;
        }
        storage
    }

    /// Makes every subsequent load fail with `message`.
    pub fn fail_loads(&self, message: impl Into<String>) {
        if let Ok(mut state) = self.state.write() {
            state.load_failure = Some(message.into());
        }
    }

    /// Makes every subsequent save fail with `message`.
    pub fn fail_saves(&self, message: impl Into<String>) {
        if let Ok(mut state) = self.state.write() {
            state.save_failure = Some(message.into());
        }
    }

    /// Returns the currently stored collection.
    #[must_use]
    pub fn stored_tasks(&self) -> Vec<Task> {
        self.state
            .read()
            .map(|state| state.tasks.clone())
            .unwrap_or_default()
    }

    /// Returns how many saves completed successfully.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.state.read().map(|state| state.save_count).unwrap_or_default()
    }
}

fn poisoned(err: &impl ToString) -> TaskStorageError {
    TaskStorageError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskStorage for InMemoryTaskStorage {
    async fn load(&self) -> TaskStorageResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        if let Some(message) = &state.load_failure {
            return Err(std::io::Error::other(message.clone()).into());
        }
        Ok(state.tasks.clone())
    }

    async fn save(&self, tasks: &[Task]) -> TaskStorageResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        if let Some(message) = &state.save_failure {
            return Err(std::io::Error::other(message.clone()).into());
        }
        state.tasks = tasks.to_vec();
        state.save_count += 1;
        Ok(())
    }

    async fn clear(&self) -> TaskStorageResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        state.tasks.clear();
        Ok(())
    }
}
