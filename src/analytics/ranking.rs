//! Derived task views and the ranking order.

use super::roi::{compute_priority_weight, compute_roi, safe_roi};
use crate::task::domain::Task;
use serde::Serialize;
use std::cmp::Ordering;

/// A task annotated with values computed on every read.
///
/// Never persisted and never mutated; rebuild it from the [`Task`] instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedTask {
    #[serde(flatten)]
    task: Task,
    #[serde(skip_serializing_if = "Option::is_none")]
    roi: Option<f64>,
    priority_weight: u8,
}

impl DerivedTask {
    /// Derives the computed fields for `task`.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            task: task.clone(),
            roi: compute_roi(task.revenue(), task.time_taken()),
            priority_weight: compute_priority_weight(task.priority()),
        }
    }

    /// Returns the underlying task.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the ROI, absent when undefined.
    #[must_use]
    pub const fn roi(&self) -> Option<f64> {
        self.roi
    }

    /// Returns the priority weight.
    #[must_use]
    pub const fn priority_weight(&self) -> u8 {
        self.priority_weight
    }

    /// Returns the ROI rounded for display.
    #[must_use]
    pub fn display_roi(&self) -> Option<f64> {
        safe_roi(self.task.revenue(), self.task.time_taken())
    }

    /// Consumes the view, returning the underlying task.
    #[must_use]
    pub fn into_task(self) -> Task {
        self.task
    }
}

/// Derives every task, preserving input order.
#[must_use]
pub fn derive_tasks(tasks: &[Task]) -> Vec<DerivedTask> {
    tasks.iter().map(DerivedTask::from_task).collect()
}

/// Returns the tasks in ranking order.
///
/// Keys, in precedence: ROI descending with undefined ROI last, priority
/// weight descending, creation time ascending, title ascending
/// (case-sensitive). The sort is stable, so full ties keep input order.
#[must_use]
pub fn sort_tasks(tasks: &[DerivedTask]) -> Vec<DerivedTask> {
    let mut ranked = tasks.to_vec();
    ranked.sort_by(compare_rank);
    ranked
}

/// Derives and ranks in one pass.
#[must_use]
pub fn rank_tasks(tasks: &[Task]) -> Vec<DerivedTask> {
    let mut ranked = derive_tasks(tasks);
    ranked.sort_by(compare_rank);
    ranked
}

fn compare_rank(a: &DerivedTask, b: &DerivedTask) -> Ordering {
    let a_roi = a.roi.unwrap_or(f64::NEG_INFINITY);
    let b_roi = b.roi.unwrap_or(f64::NEG_INFINITY);
    b_roi
        .partial_cmp(&a_roi)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.priority_weight.cmp(&a.priority_weight))
        .then_with(|| a.task.created_at().cmp(&b.task.created_at()))
        .then_with(|| a.task.title().cmp(b.task.title()))
}
