//! Percentile helpers shared by the Monte Carlo summaries.

/// Percentile of `values` at `level` (0 to 100), with linear interpolation
/// between the closest ranks.
///
/// `values` must be non-empty; the engine guarantees this by rejecting a
/// zero path count up front.
#[must_use]
pub fn percentile(values: &[f64], level: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    percentile_sorted(&sorted, level)
}

/// Percentile of an already-sorted slice. Sorting once and calling this
/// for every level avoids re-sorting per level.
#[must_use]
pub(crate) fn percentile_sorted(sorted: &[f64], level: f64) -> f64 {
    debug_assert!(!sorted.is_empty(), "percentile of an empty sample");
    debug_assert!((0.0..=100.0).contains(&level));

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let rank = level / 100.0 * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value() {
        assert_eq!(percentile(&[7.5], 10.0), 7.5);
        assert_eq!(percentile(&[7.5], 90.0), 7.5);
    }

    #[test]
    fn test_endpoints() {
        let values = [3.0, 1.0, 2.0];
        assert_eq!(percentile(&values, 0.0), 1.0);
        assert_eq!(percentile(&values, 100.0), 3.0);
    }

    #[test]
    fn test_linear_interpolation() {
        // Median of an even-sized sample falls between the middle ranks.
        assert_eq!(percentile(&[1.0, 2.0, 3.0, 4.0], 50.0), 2.5);
        assert_eq!(percentile(&[1.0, 2.0, 3.0, 4.0], 25.0), 1.75);
    }

    #[test]
    fn test_levels_are_ordered() {
        let values: Vec<f64> = (0..100).map(f64::from).collect();
        let p10 = percentile(&values, 10.0);
        let p50 = percentile(&values, 50.0);
        let p90 = percentile(&values, 90.0);
        assert!(p10 <= p50 && p50 <= p90);
    }
}
