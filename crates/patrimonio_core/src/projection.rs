//! Deterministic compound-growth projection.

use crate::model::ProjectionSeries;

/// Per-month compounding rate equivalent to a nominal annual percentage.
///
/// Exact geometric conversion: `(1 + pct/100)^(1/12) - 1`, so twelve
/// compounded months reproduce the annual rate. The Monte Carlo engine
/// deliberately uses a different (simple-division) monthly mean; see
/// [`monte_carlo`](crate::monte_carlo).
#[must_use]
#[inline]
pub fn monthly_effective_rate(annual_return_pct: f64) -> f64 {
    (1.0 + annual_return_pct / 100.0).powf(1.0 / 12.0) - 1.0
}

/// Round to currency precision (cents).
#[inline]
pub(crate) fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Project net worth forward under monthly compounding plus a fixed
/// monthly contribution.
///
/// The recurrence is `value[t+1] = value[t] * (1 + r) + contribution`,
/// rounded to cents after every step like a ledger that posts monthly.
/// A negative `initial` (net debt) is permitted and follows the same
/// recurrence.
///
/// The returned series always has `horizon_years * 12 + 1` entries and is
/// non-decreasing whenever both the contribution and the rate are
/// non-negative.
#[must_use]
pub fn project(
    initial: f64,
    monthly_contribution: f64,
    annual_return_pct: f64,
    horizon_years: u32,
) -> ProjectionSeries {
    let r = monthly_effective_rate(annual_return_pct);
    let months = horizon_years as usize * 12;

    let mut values = Vec::with_capacity(months + 1);
    let mut value = initial;
    values.push(value);
    for _ in 0..months {
        value = round_to_cents(value * (1.0 + r) + monthly_contribution);
        values.push(value);
    }

    ProjectionSeries { values }
}
