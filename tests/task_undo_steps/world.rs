//! Shared world state for task undo BDD scenarios.

use std::sync::Arc;

use taskboard::task::{
    adapters::memory::InMemoryTaskStorage,
    domain::{Task, TaskId},
    services::{StoreConfig, TaskStore},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Store type used by the BDD world.
pub type TestTaskStore = TaskStore<InMemoryTaskStorage, DefaultClock>;

/// Scenario world for task undo behaviour tests.
pub struct TaskUndoWorld {
    pub store: TestTaskStore,
    pub storage: InMemoryTaskStorage,
}

impl TaskUndoWorld {
    /// Creates a world whose store has not loaded yet.
    #[must_use]
    pub fn new() -> Self {
        let storage = InMemoryTaskStorage::new();
        let store = TaskStore::new(
            Arc::new(storage.clone()),
            Arc::new(DefaultClock),
            StoreConfig::default(),
        );

        Self { store, storage }
    }

    /// Finds the live task titled `title`.
    pub fn task_titled(&self, title: &str) -> Result<&Task, eyre::Report> {
        self.store
            .tasks()
            .iter()
            .find(|task| task.title() == title)
            .ok_or_else(|| eyre::eyre!("no live task titled {title:?}"))
    }

    /// Returns the identifier of the live task titled `title`.
    pub fn id_of(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.task_titled(title).map(Task::id)
    }
}

impl Default for TaskUndoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskUndoWorld {
    TaskUndoWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
