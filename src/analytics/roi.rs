//! Return on investment and priority weighting.

use crate::task::domain::Priority;

/// Computes `revenue / time_taken`.
///
/// Returns `None` unless both inputs are finite and `time_taken > 0`, or when
/// the quotient itself overflows. Absence is deliberately distinct from a
/// true zero ROI.
///
/// # Examples
///
/// ```
/// use taskboard::analytics::compute_roi;
///
/// assert_eq!(compute_roi(1000.0, 10.0), Some(100.0));
/// assert_eq!(compute_roi(500.0, 0.0), None);
/// assert_eq!(compute_roi(f64::NAN, 5.0), None);
/// ```
#[must_use]
pub fn compute_roi(revenue: f64, time_taken: f64) -> Option<f64> {
    if !revenue.is_finite() || !time_taken.is_finite() || time_taken <= 0.0 {
        return None;
    }
    let roi = revenue / time_taken;
    roi.is_finite().then_some(roi)
}

/// Magnitude from which every `f64` is a whole number.
const INTEGRAL_FROM: f64 = 4_503_599_627_370_496.0;

/// Display-safe ROI rounded to two decimal places.
///
/// Kept apart from [`compute_roi`] so rounding never leaks into averages.
/// Defined whenever [`compute_roi`] is.
#[must_use]
pub fn safe_roi(revenue: f64, time_taken: f64) -> Option<f64> {
    let roi = compute_roi(revenue, time_taken)?;
    if roi.abs() >= INTEGRAL_FROM {
        return Some(roi);
    }
    Some((roi * 100.0).round() / 100.0)
}

/// Ranking weight for a priority or a raw priority label.
///
/// Unrecognized labels degrade to the `Low` weight of 1.
///
/// ```
/// use taskboard::{analytics::compute_priority_weight, task::domain::Priority};
///
/// assert_eq!(compute_priority_weight(Priority::High), 3);
/// assert_eq!(compute_priority_weight("Urgent"), 1);
/// ```
#[must_use]
pub fn compute_priority_weight(priority: impl Into<Priority>) -> u8 {
    priority.into().weight()
}
