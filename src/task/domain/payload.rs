//! Creation and update payloads for tasks.
//!
//! Payloads validate scalar fields when they are built, so the store's
//! mutation commands never have to reject input.

use super::{Priority, TaskDomainError, TaskId, TaskStatus};
use chrono::{DateTime, Utc};

/// Validated payload for adding a task.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub(super) id: Option<TaskId>,
    pub(super) title: String,
    pub(super) revenue: f64,
    pub(super) time_taken: f64,
    pub(super) priority: Priority,
    pub(super) status: TaskStatus,
    pub(super) created_at: Option<DateTime<Utc>>,
    pub(super) completed_at: Option<DateTime<Utc>>,
    pub(super) notes: Option<String>,
}

impl NewTask {
    /// Creates a payload with the required fields.
    ///
    /// Priority defaults to [`Priority::Medium`] and status to
    /// [`TaskStatus::Todo`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the trimmed title is
    /// empty, or [`TaskDomainError::InvalidRevenue`] /
    /// [`TaskDomainError::InvalidTimeTaken`] when an amount is negative or
    /// not finite.
    pub fn new(
        title: impl Into<String>,
        revenue: f64,
        time_taken: f64,
    ) -> Result<Self, TaskDomainError> {
        Ok(Self {
            id: None,
            title: validate_title(&title.into())?,
            revenue: validate_revenue(revenue)?,
            time_taken: validate_time_taken(time_taken)?,
            priority: Priority::default(),
            status: TaskStatus::default(),
            created_at: None,
            completed_at: None,
            notes: None,
        })
    }

    /// Uses a caller-supplied identifier instead of a fresh one.
    #[must_use]
    pub const fn with_id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Uses a caller-supplied creation timestamp instead of the clock.
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the completion timestamp. Ignored unless the status is Done.
    #[must_use]
    pub const fn with_completed_at(mut self, completed_at: DateTime<Utc>) -> Self {
        self.completed_at = Some(completed_at);
        self
    }

    /// Sets free-text notes. Blank notes are treated as absent.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = normalize_notes(&notes.into());
        self
    }

    /// Returns the caller-supplied identifier, if any.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns the validated title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Partial update applied to an existing task.
///
/// Unset fields leave the task untouched. `notes` and `completed_at` are
/// tri-state: leave, set, or clear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub(super) title: Option<String>,
    pub(super) revenue: Option<f64>,
    pub(super) time_taken: Option<f64>,
    pub(super) priority: Option<Priority>,
    pub(super) status: Option<TaskStatus>,
    pub(super) completed_at: Option<Option<DateTime<Utc>>>,
    pub(super) notes: Option<Option<String>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the trimmed title is empty.
    pub fn with_title(mut self, title: impl Into<String>) -> Result<Self, TaskDomainError> {
        self.title = Some(validate_title(&title.into())?);
        Ok(self)
    }

    /// Replaces the revenue amount.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidRevenue`] for negative or non-finite
    /// amounts.
    pub fn with_revenue(mut self, revenue: f64) -> Result<Self, TaskDomainError> {
        self.revenue = Some(validate_revenue(revenue)?);
        Ok(self)
    }

    /// Replaces the time taken.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTimeTaken`] for negative or
    /// non-finite hours.
    pub fn with_time_taken(mut self, time_taken: f64) -> Result<Self, TaskDomainError> {
        self.time_taken = Some(validate_time_taken(time_taken)?);
        Ok(self)
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the completion timestamp.
    #[must_use]
    pub const fn with_completed_at(mut self, completed_at: DateTime<Utc>) -> Self {
        self.completed_at = Some(Some(completed_at));
        self
    }

    /// Removes the completion timestamp.
    #[must_use]
    pub const fn clear_completed_at(mut self) -> Self {
        self.completed_at = Some(None);
        self
    }

    /// Replaces the notes. Blank notes clear them.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(normalize_notes(&notes.into()));
        self
    }

    /// Removes the notes.
    #[must_use]
    pub fn clear_notes(mut self) -> Self {
        self.notes = Some(None);
        self
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.field_names().is_empty()
    }

    /// Names of the fields this patch touches, in declaration order.
    #[must_use]
    pub fn field_names(&self) -> Vec<&'static str> {
        [
            ("title", self.title.is_some()),
            ("revenue", self.revenue.is_some()),
            ("timeTaken", self.time_taken.is_some()),
            ("priority", self.priority.is_some()),
            ("status", self.status.is_some()),
            ("completedAt", self.completed_at.is_some()),
            ("notes", self.notes.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }
}

fn validate_title(raw: &str) -> Result<String, TaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    Ok(trimmed.to_owned())
}

fn validate_revenue(revenue: f64) -> Result<f64, TaskDomainError> {
    if !revenue.is_finite() || revenue < 0.0 {
        return Err(TaskDomainError::InvalidRevenue(revenue));
    }
    Ok(revenue)
}

fn validate_time_taken(time_taken: f64) -> Result<f64, TaskDomainError> {
    if !time_taken.is_finite() || time_taken < 0.0 {
        return Err(TaskDomainError::InvalidTimeTaken(time_taken));
    }
    Ok(time_taken)
}

fn normalize_notes(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
