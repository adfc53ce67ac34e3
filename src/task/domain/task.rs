//! Task record and its mutation rules.

use super::{NewTask, Priority, TaskId, TaskPatch, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Canonical task record.
///
/// Serialized as a camelCase JSON object; absent optionals are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    revenue: f64,
    time_taken: f64,
    priority: Priority,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

/// Parameter object for reconstructing a task without validation.
///
/// Used by storage adapters and fixtures; values are taken verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted revenue amount.
    pub revenue: f64,
    /// Persisted hours spent.
    pub time_taken: f64,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted notes, if any.
    pub notes: Option<String>,
}

impl Task {
    /// Creates a task from a validated payload.
    ///
    /// A fresh identifier is assigned when the payload carries none, and the
    /// clock supplies `created_at` unless the payload sets it.
    #[must_use]
    pub fn new(payload: NewTask, clock: &impl Clock) -> Self {
        let mut task = Self {
            id: payload.id.unwrap_or_default(),
            title: payload.title,
            revenue: payload.revenue,
            time_taken: payload.time_taken,
            priority: payload.priority,
            status: payload.status,
            created_at: payload.created_at.unwrap_or_else(|| clock.utc()),
            completed_at: payload.completed_at,
            notes: payload.notes,
        };
        task.reconcile_completion(clock);
        task
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            revenue: data.revenue,
            time_taken: data.time_taken,
            priority: data.priority,
            status: data.status,
            created_at: data.created_at,
            completed_at: data.completed_at,
            notes: data.notes,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the revenue amount.
    #[must_use]
    pub const fn revenue(&self) -> f64 {
        self.revenue
    }

    /// Returns the hours spent.
    #[must_use]
    pub const fn time_taken(&self) -> f64 {
        self.time_taken
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, present only for Done tasks.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Merges a patch onto this task.
    ///
    /// Identifier and creation timestamp never change. Completion bookkeeping
    /// follows the status afterwards: see [`Task::new`].
    pub fn apply_patch(&mut self, patch: TaskPatch, clock: &impl Clock) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(revenue) = patch.revenue {
            self.revenue = revenue;
        }
        if let Some(time_taken) = patch.time_taken {
            self.time_taken = time_taken;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(completed_at) = patch.completed_at {
            self.completed_at = completed_at;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        self.reconcile_completion(clock);
    }

    /// Keeps `completed_at` present exactly when the task is Done, and never
    /// earlier than `created_at`.
    fn reconcile_completion(&mut self, clock: &impl Clock) {
        if !self.status.is_done() {
            self.completed_at = None;
            return;
        }
        let completed_at = self.completed_at.unwrap_or_else(|| clock.utc());
        self.completed_at = Some(completed_at.max(self.created_at));
    }
}
