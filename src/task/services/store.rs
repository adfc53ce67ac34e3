//! Owned task store with single-slot undo and best-effort persistence.

use super::{
    activity::{ActivityKind, ActivityLog},
    config::StoreConfig,
    writer::SnapshotWriter,
};
use crate::analytics::{
    DerivedTask, ForecastPoint, Funnel, Metrics, compute_forecast, compute_funnel,
    compute_metrics, compute_throughput_by_week, rank_tasks,
};
use crate::task::{
    domain::{NewTask, Task, TaskId, TaskPatch},
    ports::TaskStorage,
};
use mockable::Clock;
use std::sync::Arc;

/// Phase of the one-time initial load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// The load has not settled yet.
    Loading,
    /// The load succeeded.
    Ready,
    /// The load failed; the session continues with an empty list.
    Failed(String),
}

/// Authoritative in-memory task collection.
///
/// Mutations apply synchronously and then queue a full snapshot for the
/// storage collaborator. Save failures are logged and never roll back the
/// in-memory state. Derived views are recomputed on every read.
///
/// Only the most recent deletion can be undone, and an undone task is
/// appended to the end of the list rather than returned to its old position.
pub struct TaskStore<S, C>
where
    S: TaskStorage + 'static,
    C: Clock + Send + Sync,
{
    storage: Arc<S>,
    clock: Arc<C>,
    config: StoreConfig,
    tasks: Vec<Task>,
    phase: LoadPhase,
    last_deleted: Option<Task>,
    activity: ActivityLog,
    writer: Option<SnapshotWriter>,
}

impl<S, C> TaskStore<S, C>
where
    S: TaskStorage + 'static,
    C: Clock + Send + Sync,
{
    /// Creates an empty store in the [`LoadPhase::Loading`] phase.
    ///
    /// Nothing is saved until [`TaskStore::load`] settles.
    #[must_use]
    pub fn new(storage: Arc<S>, clock: Arc<C>, config: StoreConfig) -> Self {
        let activity = ActivityLog::new(config.activity_capacity);
        Self {
            storage,
            clock,
            config,
            tasks: Vec::new(),
            phase: LoadPhase::Loading,
            last_deleted: None,
            activity,
            writer: None,
        }
    }

    /// Creates a store and performs the initial load.
    pub async fn open(storage: Arc<S>, clock: Arc<C>, config: StoreConfig) -> Self {
        let mut store = Self::new(storage, clock, config);
        store.load().await;
        store
    }

    /// Performs the one-time load from storage.
    ///
    /// Success replaces the list with the stored tasks. Failure empties the
    /// list and records the error; it is not retried. Either way the store
    /// starts persisting mutations afterwards. Calls after the first are
    /// ignored.
    ///
    /// Must run inside a tokio runtime.
    pub async fn load(&mut self) {
        if self.phase != LoadPhase::Loading {
            tracing::debug!("initial load already settled; ignoring");
            return;
        }
        match self.storage.load().await {
            Ok(tasks) => {
                tracing::info!(task_count = tasks.len(), "loaded tasks");
                self.tasks = tasks;
                self.phase = LoadPhase::Ready;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load tasks");
                self.tasks.clear();
                self.phase = LoadPhase::Failed(err.to_string());
            }
        }
        self.writer = Some(SnapshotWriter::spawn(Arc::clone(&self.storage)));
    }

    /// Appends a task and returns its identifier.
    ///
    /// A fresh identifier is assigned when the payload has none, or when the
    /// supplied one is already live. Duplicate titles are accepted.
    pub fn add(&mut self, payload: NewTask) -> TaskId {
        let payload = match payload.id() {
            Some(id) if self.contains(id) => {
                tracing::warn!(task_id = %id, "supplied task id already live; assigning a new one");
                payload.with_id(TaskId::new())
            }
            _ => payload,
        };
        let task = Task::new(payload, &*self.clock);
        let id = task.id();
        self.record(ActivityKind::Add, format!("Added: {}", task.title()));
        self.tasks.push(task);
        self.persist();
        id
    }

    /// Merges `patch` onto the task with `id`.
    ///
    /// Unknown ids and empty patches are silently ignored.
    pub fn update(&mut self, id: TaskId, patch: TaskPatch) {
        if patch.is_empty() {
            tracing::debug!(task_id = %id, "empty patch; nothing to update");
            return;
        }
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            tracing::debug!(task_id = %id, "update ignored; task not found");
            return;
        };
        let summary = format!("Updated: {}", patch.field_names().join(", "));
        task.apply_patch(patch, &*self.clock);
        self.record(ActivityKind::Update, summary);
        self.persist();
    }

    /// Removes the task with `id`, keeping it as the undoable deletion.
    ///
    /// Replaces any earlier undoable deletion. Unknown ids are silently
    /// ignored.
    pub fn delete(&mut self, id: TaskId) {
        let Some(position) = self.tasks.iter().position(|task| task.id() == id) else {
            tracing::debug!(task_id = %id, "delete ignored; task not found");
            return;
        };
        let removed = self.tasks.remove(position);
        self.last_deleted = Some(removed);
        self.record(ActivityKind::Delete, format!("Deleted task {id}"));
        self.persist();
    }

    /// Re-appends the last deleted task and empties the undo slot.
    ///
    /// Does nothing when the slot is empty. When a live task has taken the
    /// deleted task's id in the meantime, the snapshot is discarded instead.
    pub fn undo_delete(&mut self) {
        let Some(task) = self.last_deleted.take() else {
            tracing::debug!("nothing to undo");
            return;
        };
        if self.contains(task.id()) {
            tracing::debug!(task_id = %task.id(), "undo dropped; id is live again");
            return;
        }
        self.tasks.push(task);
        self.record(ActivityKind::Undo, "Undo delete");
        self.persist();
    }

    /// Empties the undo slot without restoring anything.
    pub fn clear_last_deleted(&mut self) {
        self.last_deleted = None;
    }

    /// Waits until every queued save has been attempted.
    pub async fn flush(&self) {
        if let Some(writer) = &self.writer {
            writer.flush().await;
        }
    }

    /// Returns the live tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the live task with `id`.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the load phase.
    #[must_use]
    pub const fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// Returns `true` until the initial load settles.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading)
    }

    /// Returns the load error message, if the load failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(message) => Some(message),
            LoadPhase::Loading | LoadPhase::Ready => None,
        }
    }

    /// Returns the task that [`TaskStore::undo_delete`] would restore.
    #[must_use]
    pub const fn last_deleted(&self) -> Option<&Task> {
        self.last_deleted.as_ref()
    }

    /// Returns the derived tasks in ranking order.
    #[must_use]
    pub fn derived_sorted(&self) -> Vec<DerivedTask> {
        rank_tasks(&self.tasks)
    }

    /// Returns the aggregate metrics snapshot.
    #[must_use]
    pub fn metrics(&self) -> Metrics {
        compute_metrics(&self.tasks)
    }

    /// Returns the status funnel.
    #[must_use]
    pub fn funnel(&self) -> Funnel {
        compute_funnel(&self.tasks)
    }

    /// Projects weekly completed revenue over the configured horizon.
    #[must_use]
    pub fn forecast(&self) -> Vec<ForecastPoint> {
        compute_forecast(
            &compute_throughput_by_week(&self.tasks),
            self.config.forecast_horizon_weeks,
        )
    }

    /// Returns the mutation history, newest first.
    #[must_use]
    pub const fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn contains(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|task| task.id() == id)
    }

    fn record(&mut self, kind: ActivityKind, summary: impl Into<String>) {
        self.activity.record(kind, summary, self.clock.utc());
    }

    fn persist(&self) {
        match &self.writer {
            Some(writer) => writer.enqueue(self.tasks.clone()),
            None => tracing::debug!("initial load not settled; skipping save"),
        }
    }
}
