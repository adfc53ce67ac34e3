//! Completion velocity per priority.

use super::count_as_f64;
use crate::task::domain::{Priority, Task};
use chrono::{DateTime, Utc};
use serde::Serialize;

const MILLIS_PER_DAY: i64 = 86_400_000;
const MILLIS_PER_HALF_DAY: i64 = 43_200_000;

/// Whole days from `start` to `end`, rounded to nearest and floored at 0.
#[must_use]
pub fn days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> u64 {
    let millis = (end - start).num_milliseconds();
    let days = millis
        .saturating_add(MILLIS_PER_HALF_DAY)
        .div_euclid(MILLIS_PER_DAY);
    u64::try_from(days).unwrap_or_default()
}

/// Average and median completion span for one priority bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VelocityStats {
    /// Mean days from creation to completion.
    pub avg_days: f64,
    /// Lower median days from creation to completion.
    pub median_days: u64,
}

impl VelocityStats {
    fn from_spans(mut spans: Vec<u64>) -> Self {
        if spans.is_empty() {
            return Self::default();
        }
        spans.sort_unstable();
        let total: u64 = spans.iter().sum();
        let middle = spans.len().saturating_sub(1).div_euclid(2);
        Self {
            avg_days: count_as_span(total) / count_as_f64(spans.len()),
            median_days: spans.get(middle).copied().unwrap_or_default(),
        }
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "summed day spans stay far below 2^52"
)]
const fn count_as_span(days: u64) -> f64 {
    days as f64
}

/// Velocity statistics for every priority bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct VelocityByPriority {
    /// High-priority bucket.
    #[serde(rename = "High")]
    pub high: VelocityStats,
    /// Medium-priority bucket.
    #[serde(rename = "Medium")]
    pub medium: VelocityStats,
    /// Low-priority bucket.
    #[serde(rename = "Low")]
    pub low: VelocityStats,
}

impl VelocityByPriority {
    /// Returns the bucket for `priority`.
    #[must_use]
    pub const fn get(&self, priority: Priority) -> VelocityStats {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }
}

/// Computes completion velocity per priority over tasks with a completion
/// timestamp. Buckets without completed tasks report zeros.
#[must_use]
pub fn compute_velocity_by_priority(tasks: &[Task]) -> VelocityByPriority {
    let spans_for = |priority: Priority| {
        tasks
            .iter()
            .filter(|task| task.priority() == priority)
            .filter_map(|task| {
                task.completed_at()
                    .map(|completed_at| days_between(task.created_at(), completed_at))
            })
            .collect::<Vec<_>>()
    };
    VelocityByPriority {
        high: VelocityStats::from_spans(spans_for(Priority::High)),
        medium: VelocityStats::from_spans(spans_for(Priority::Medium)),
        low: VelocityStats::from_spans(spans_for(Priority::Low)),
    }
}
