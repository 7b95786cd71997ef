//! Clamping for operator and feed input. Bad numbers become zero, never errors.

/// Non-negative count.
pub(crate) const fn count(value: i64) -> i64 {
    if value < 0 {
        0
    } else {
        value
    }
}

/// Non-negative duration; NaN collapses to zero.
pub(crate) fn seconds(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Penalty as a deduction: never negative, NaN collapses to zero.
///
/// Tuning handed to `Planner::new` is not validated, so a curve built from
/// negative ceilings or inverted breakpoints still has to stay a deduction.
pub(crate) fn penalty(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}
