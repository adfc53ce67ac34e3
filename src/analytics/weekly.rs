//! ISO-8601 week bucketing: completion throughput and creation cohorts.

use super::finite_sum;
use crate::task::domain::{Priority, Task};
use chrono::{DateTime, Datelike, Utc};
use serde::{Serialize, Serializer};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;

/// ISO-8601 week-numbering key (Monday start; week 1 holds the first
/// Thursday of the year).
///
/// Orders numerically by year then week, and renders as `2024-W7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IsoWeek {
    year: i32,
    week: u32,
}

impl IsoWeek {
    /// Returns the ISO week containing `timestamp` (UTC).
    #[must_use]
    pub fn of(timestamp: DateTime<Utc>) -> Self {
        let iso = timestamp.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    /// Returns the ISO week-numbering year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the week number, 1 through 53.
    #[must_use]
    pub const fn week(self) -> u32 {
        self.week
    }
}

impl fmt::Display for IsoWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{}", self.year, self.week)
    }
}

impl Serialize for IsoWeek {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Tasks completed within one ISO week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklyThroughput {
    /// Week of completion.
    pub week: IsoWeek,
    /// Number of tasks completed.
    pub count: usize,
    /// Revenue of those tasks.
    pub revenue: f64,
}

/// Groups completed tasks by completion week, ascending by week.
#[must_use]
pub fn compute_throughput_by_week(tasks: &[Task]) -> Vec<WeeklyThroughput> {
    let mut by_week: BTreeMap<IsoWeek, Vec<f64>> = BTreeMap::new();
    for task in tasks {
        if let Some(completed_at) = task.completed_at() {
            by_week
                .entry(IsoWeek::of(completed_at))
                .or_default()
                .push(task.revenue());
        }
    }
    by_week
        .into_iter()
        .map(|(week, revenues)| WeeklyThroughput {
            week,
            count: revenues.len(),
            revenue: finite_sum(revenues.into_iter()),
        })
        .collect()
}

/// Revenue attributed to one (creation week, priority) cohort.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CohortRevenue {
    /// Week the tasks were created.
    pub week: IsoWeek,
    /// Shared priority of the cohort.
    pub priority: Priority,
    /// Summed revenue.
    pub revenue: f64,
}

/// Sums revenue per (creation week, priority), ascending by week and then
/// by priority weight, highest first.
#[must_use]
pub fn compute_cohort_revenue(tasks: &[Task]) -> Vec<CohortRevenue> {
    let mut by_cohort: BTreeMap<(IsoWeek, Reverse<u8>), (Priority, f64)> = BTreeMap::new();
    for task in tasks {
        let key = (
            IsoWeek::of(task.created_at()),
            Reverse(task.priority().weight()),
        );
        let entry = by_cohort.entry(key).or_insert((task.priority(), 0.0));
        if task.revenue().is_finite() {
            entry.1 += task.revenue();
        }
    }
    by_cohort
        .into_iter()
        .map(|((week, _), (priority, revenue))| CohortRevenue {
            week,
            priority,
            revenue,
        })
        .collect()
}
