//! Period-over-period growth arithmetic.
//!
//! Both year-over-year and month-over-month deltas are the same computation,
//! `(current - previous) / previous * 100`, differing only in which prior
//! snapshot supplies `previous`.

/// Percentage change from `previous` to `current`.
///
/// Returns exactly `0.0` when `previous == 0`. That is a deliberate
/// saturating default to keep a zero baseline from propagating as infinity
/// or NaN into serialized reports; it does not claim the series was flat.
/// Whether a comparable baseline existed at all is the caller's concern
/// (absent comparables yield absent deltas, not zeros).
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_previous_saturates_to_zero() {
        assert_eq!(percent_change(120.0, 0.0), 0.0);
        assert_eq!(percent_change(0.0, 0.0), 0.0);
        assert_eq!(percent_change(-5.0, 0.0), 0.0);
    }

    #[test]
    fn test_unchanged_value_is_zero() {
        for x in [0.5, 1.0, 37.25, 1_000_000.0] {
            assert_eq!(percent_change(x, x), 0.0);
        }
    }

    #[test]
    fn test_exact_formula() {
        assert_eq!(percent_change(120.0, 100.0), 20.0);
        assert_eq!(percent_change(80.0, 100.0), -20.0);
        assert_eq!(percent_change(150.0, 60.0), 150.0);
    }

    #[test]
    fn test_decline_below_baseline() {
        let change = percent_change(25.0, 100.0);
        assert_eq!(change, -75.0);
    }

    #[test]
    fn test_result_is_finite_for_nonzero_previous() {
        assert!(percent_change(1e12, 0.001).is_finite());
    }
}
