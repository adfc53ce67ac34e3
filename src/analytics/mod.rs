//! Pure derivation functions over task collections.
//!
//! Everything here is stateless and total: degenerate input (zero hours,
//! non-finite amounts, empty collections) resolves to a defined sentinel
//! instead of an error, so callers never branch defensively.
//!
//! - [`roi`]: per-task return on investment and priority weight
//! - [`ranking`]: derived task views and their ranking order
//! - [`metrics`]: aggregate dashboard snapshot
//! - [`pipeline`]: status funnel and probability-weighted revenue
//! - [`velocity`]: completion speed per priority
//! - [`weekly`]: ISO-week throughput and creation cohorts
//! - [`forecast`]: least-squares revenue projection

pub mod forecast;
pub mod metrics;
pub mod pipeline;
pub mod ranking;
pub mod roi;
pub mod velocity;
pub mod weekly;

pub use forecast::{ForecastPoint, compute_forecast, forecast_revenue};
pub use metrics::{
    Metrics, PerformanceGrade, compute_average_roi, compute_metrics, compute_performance_grade,
    compute_revenue_per_hour, compute_time_efficiency, compute_total_revenue,
    compute_total_time_taken,
};
pub use pipeline::{Funnel, compute_funnel, compute_weighted_pipeline};
pub use ranking::{DerivedTask, derive_tasks, rank_tasks, sort_tasks};
pub use roi::{compute_priority_weight, compute_roi, safe_roi};
pub use velocity::{VelocityByPriority, VelocityStats, compute_velocity_by_priority, days_between};
pub use weekly::{
    CohortRevenue, IsoWeek, WeeklyThroughput, compute_cohort_revenue, compute_throughput_by_week,
};

#[cfg(test)]
mod tests;

#[expect(
    clippy::cast_precision_loss,
    reason = "task counts and indices stay far below 2^52"
)]
const fn count_as_f64(count: usize) -> f64 {
    count as f64
}

/// Sums the finite values, skipping anything that would poison the total.
fn finite_sum(values: impl Iterator<Item = f64>) -> f64 {
    values.filter(|value| value.is_finite()).sum()
}
