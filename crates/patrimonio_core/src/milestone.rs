//! Milestone estimation: inverting the projection to answer "when do I
//! cross target T?".

use crate::projection::monthly_effective_rate;

/// Search cap for [`months_to_target`]: 100 years. Reaching the cap means
/// the target is unreachable under the given parameters, not that it takes
/// exactly this long.
pub const MONTHS_CAP: u32 = 1200;

/// Months until the compounding recurrence first reaches `target`.
///
/// Applies the same monthly recurrence as the projection, unrounded, one
/// step at a time. Returns 0 immediately when `initial` already meets the
/// target, and `max_months` as a not-reached sentinel when the recurrence
/// cannot get there (e.g. contribution and rate both too small against a
/// shrinking balance). Callers must check for the sentinel before
/// formatting a "time remaining" message.
#[must_use]
pub fn months_to_target(
    initial: f64,
    target: f64,
    monthly_contribution: f64,
    annual_return_pct: f64,
    max_months: u32,
) -> u32 {
    let r = monthly_effective_rate(annual_return_pct);
    let mut value = initial;
    let mut months = 0;
    while value < target && months < max_months {
        value = value * (1.0 + r) + monthly_contribution;
        months += 1;
    }
    months
}

/// Milestone completion percentage, clamped to 100 from above.
///
/// Zero for a non-positive target; negative net worth yields a negative
/// percentage, which renders as an empty bar.
#[must_use]
pub fn progress_pct(net_worth: f64, target: f64) -> f64 {
    if target > 0.0 {
        (net_worth / target * 100.0).min(100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_reached() {
        assert_eq!(months_to_target(50_000.0, 50_000.0, 600.0, 7.0, MONTHS_CAP), 0);
        assert_eq!(months_to_target(60_000.0, 50_000.0, 0.0, 0.0, MONTHS_CAP), 0);
    }

    #[test]
    fn test_unreachable_returns_cap() {
        // No contribution, no growth: the balance never moves.
        assert_eq!(months_to_target(1_000.0, 2_000.0, 0.0, 0.0, MONTHS_CAP), MONTHS_CAP);
    }

    #[test]
    fn test_contribution_only() {
        // 100 per month at zero rate: 10 months to close a 1,000 gap.
        assert_eq!(months_to_target(0.0, 1_000.0, 100.0, 0.0, MONTHS_CAP), 10);
    }

    #[test]
    fn test_progress_pct_clamps() {
        assert_eq!(progress_pct(200_000.0, 100_000.0), 100.0);
        assert_eq!(progress_pct(50_000.0, 100_000.0), 50.0);
        assert_eq!(progress_pct(10.0, 0.0), 0.0);
    }
}
