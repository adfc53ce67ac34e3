//! Status funnel and probability-weighted revenue.

use super::{count_as_f64, finite_sum};
use crate::task::domain::{Task, TaskStatus};
use serde::Serialize;

/// Task counts per status with stage conversion ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Funnel {
    /// Tasks not yet started.
    pub todo: usize,
    /// Tasks underway.
    pub in_progress: usize,
    /// Tasks finished.
    pub done: usize,
    /// `(in_progress + done) / total`, 0 for an empty collection.
    pub conversion_todo_to_in_progress: f64,
    /// `done / in_progress`, 0 when nothing is in progress.
    pub conversion_in_progress_to_done: f64,
}

/// Counts tasks per status and derives the conversion ratios.
#[must_use]
pub fn compute_funnel(tasks: &[Task]) -> Funnel {
    let (todo, in_progress, done) =
        tasks
            .iter()
            .fold((0_usize, 0_usize, 0_usize), |(todo, active, done), task| {
                match task.status() {
                    TaskStatus::Todo => (todo + 1, active, done),
                    TaskStatus::InProgress => (todo, active + 1, done),
                    TaskStatus::Done => (todo, active, done + 1),
                }
            });
    let total = todo + in_progress + done;
    Funnel {
        todo,
        in_progress,
        done,
        conversion_todo_to_in_progress: ratio(in_progress + done, total),
        conversion_in_progress_to_done: ratio(done, in_progress),
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    count_as_f64(numerator) / count_as_f64(denominator)
}

/// Probability that a task in `status` turns into realised revenue.
const fn status_weight(status: TaskStatus) -> f64 {
    match status {
        TaskStatus::Todo => 0.1,
        TaskStatus::InProgress => 0.5,
        TaskStatus::Done => 1.0,
    }
}

/// Expected revenue: each task's revenue weighted by its status.
#[must_use]
pub fn compute_weighted_pipeline(tasks: &[Task]) -> f64 {
    finite_sum(
        tasks
            .iter()
            .map(|task| task.revenue() * status_weight(task.status())),
    )
}
