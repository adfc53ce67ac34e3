//! Aggregate dashboard metrics.

use super::{count_as_f64, finite_sum, roi::compute_roi};
use crate::task::domain::Task;
use serde::Serialize;
use std::fmt;

/// Performance grade derived from the average ROI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PerformanceGrade {
    /// Average ROI above 500.
    Excellent,
    /// Average ROI from 200 to 500 inclusive.
    Good,
    /// Anything lower.
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl PerformanceGrade {
    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for PerformanceGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregate snapshot over a task collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Revenue of Done tasks.
    pub total_revenue: f64,
    /// Hours across all tasks.
    pub total_time: f64,
    /// Share of tasks that are Done, as a percentage.
    pub time_efficiency_pct: f64,
    /// Done revenue per hour spent.
    pub revenue_per_hour: f64,
    /// Mean of the defined ROI values.
    pub average_roi: f64,
    /// Grade for `average_roi`.
    pub performance_grade: PerformanceGrade,
}

/// Computes every aggregate in one snapshot.
#[must_use]
pub fn compute_metrics(tasks: &[Task]) -> Metrics {
    let average_roi = compute_average_roi(tasks);
    Metrics {
        total_revenue: compute_total_revenue(tasks),
        total_time: compute_total_time_taken(tasks),
        time_efficiency_pct: compute_time_efficiency(tasks),
        revenue_per_hour: compute_revenue_per_hour(tasks),
        average_roi,
        performance_grade: compute_performance_grade(average_roi),
    }
}

/// Sum of revenue over Done tasks; 0 for empty input.
#[must_use]
pub fn compute_total_revenue(tasks: &[Task]) -> f64 {
    finite_sum(
        tasks
            .iter()
            .filter(|task| task.status().is_done())
            .map(Task::revenue),
    )
}

/// Sum of hours over all tasks.
#[must_use]
pub fn compute_total_time_taken(tasks: &[Task]) -> f64 {
    finite_sum(tasks.iter().map(Task::time_taken))
}

/// Percentage of tasks that are Done; 0 for empty input.
#[must_use]
pub fn compute_time_efficiency(tasks: &[Task]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    let done = tasks.iter().filter(|task| task.status().is_done()).count();
    100.0 * count_as_f64(done) / count_as_f64(tasks.len())
}

/// Done revenue divided by total hours; 0 when no time was logged.
#[must_use]
pub fn compute_revenue_per_hour(tasks: &[Task]) -> f64 {
    let time = compute_total_time_taken(tasks);
    if time > 0.0 {
        compute_total_revenue(tasks) / time
    } else {
        0.0
    }
}

/// Mean ROI over tasks whose ROI is defined; 0 when none is.
#[must_use]
pub fn compute_average_roi(tasks: &[Task]) -> f64 {
    let (sum, count) = tasks
        .iter()
        .filter_map(|task| compute_roi(task.revenue(), task.time_taken()))
        .fold((0.0, 0_usize), |(sum, count), roi| (sum + roi, count + 1));
    if count == 0 {
        return 0.0;
    }
    sum / count_as_f64(count)
}

/// Grades an average ROI. Exactly 500 is Good, not Excellent.
#[must_use]
pub const fn compute_performance_grade(average_roi: f64) -> PerformanceGrade {
    if average_roi > 500.0 {
        PerformanceGrade::Excellent
    } else if average_roi >= 200.0 {
        PerformanceGrade::Good
    } else {
        PerformanceGrade::NeedsImprovement
    }
}
