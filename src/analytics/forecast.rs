//! Linear revenue forecast from a weekly series.

use super::{count_as_f64, weekly::WeeklyThroughput};
use serde::Serialize;

/// One projected week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    /// Offset label beyond the last observed week: `+1`, `+2`, ...
    pub week: String,
    /// Projected revenue, never negative.
    pub revenue: f64,
}

/// Projects `horizon_weeks` of revenue beyond a weekly throughput series.
///
/// See [`forecast_revenue`].
#[must_use]
pub fn compute_forecast(weekly: &[WeeklyThroughput], horizon_weeks: usize) -> Vec<ForecastPoint> {
    let series: Vec<f64> = weekly.iter().map(|point| point.revenue).collect();
    forecast_revenue(&series, horizon_weeks)
}

/// Fits revenue against 0-based week index by ordinary least squares and
/// projects `horizon_weeks` points past the last index, clamped at zero.
///
/// Returns an empty forecast for fewer than two observations.
///
/// ```
/// use taskboard::analytics::forecast_revenue;
///
/// let forecast = forecast_revenue(&[100.0, 200.0], 1);
/// assert_eq!(forecast.len(), 1);
/// assert_eq!(forecast[0].week, "+1");
/// assert!((forecast[0].revenue - 300.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn forecast_revenue(series: &[f64], horizon_weeks: usize) -> Vec<ForecastPoint> {
    if series.len() < 2 {
        return Vec::new();
    }
    let n = count_as_f64(series.len());
    let (sum_x, sum_y, sum_xy, sum_xx) = series.iter().enumerate().fold(
        (0.0, 0.0, 0.0, 0.0),
        |(sx, sy, sxy, sxx), (index, &revenue)| {
            let x = count_as_f64(index);
            (sx + x, sy + revenue, sxy + x * revenue, sxx + x * x)
        },
    );
    let denominator = n * sum_xx - sum_x * sum_x;
    let slope = if denominator.abs() > f64::EPSILON {
        (n * sum_xy - sum_x * sum_y) / denominator
    } else {
        0.0
    };
    let intercept = (sum_y - slope * sum_x) / n;
    let last_index = series.len() - 1;

    (1..=horizon_weeks)
        .map(|offset| {
            let x = count_as_f64(last_index + offset);
            ForecastPoint {
                week: format!("+{offset}"),
                revenue: (slope * x + intercept).max(0.0),
            }
        })
        .collect()
}
