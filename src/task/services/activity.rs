//! Bounded history of store mutations.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use uuid::Uuid;

/// Kind of mutation recorded in the activity log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// A task was added.
    Add,
    /// A task was updated.
    Update,
    /// A task was deleted.
    Delete,
    /// The last deletion was undone.
    Undo,
}

/// One recorded mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    id: Uuid,
    kind: ActivityKind,
    summary: String,
    at: DateTime<Utc>,
}

impl ActivityEntry {
    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the mutation kind.
    #[must_use]
    pub const fn kind(&self) -> ActivityKind {
        self.kind
    }

    /// Returns the human-readable summary.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns when the mutation happened.
    #[must_use]
    pub const fn at(&self) -> DateTime<Utc> {
        self.at
    }
}

/// Newest-first activity history capped at a fixed capacity.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl ActivityLog {
    /// Creates an empty log retaining at most `capacity` entries.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Records a mutation, evicting the oldest entry when full.
    pub fn record(&mut self, kind: ActivityKind, summary: impl Into<String>, at: DateTime<Utc>) {
        if self.capacity == 0 {
            return;
        }
        self.entries.push_front(ActivityEntry {
            id: Uuid::new_v4(),
            kind,
            summary: summary.into(),
            at,
        });
        self.entries.truncate(self.capacity);
    }

    /// Iterates entries newest first.
    pub fn entries(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    /// Returns the most recent entry.
    #[must_use]
    pub fn latest(&self) -> Option<&ActivityEntry> {
        self.entries.front()
    }

    /// Returns the number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
