//! Monte Carlo stress test of the net-worth projection.
//!
//! Each path follows the projection recurrence with a random monthly
//! return drawn from a normal distribution in place of the fixed rate.
//! The run is deterministic for a given seed: the same arguments always
//! produce a bit-identical ensemble, with or without the `parallel`
//! feature.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand_distr::{Distribution, Normal};
#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::debug;

use crate::error::SimulationError;
use crate::model::{MonteCarloSummary, PercentileBands, SimulationEnsemble};
use crate::stats::percentile_sorted;

/// Percentile levels reported for the final-value distribution.
pub const FINAL_PERCENTILES: [f64; 5] = [10.0, 25.0, 50.0, 75.0, 90.0];

/// Wealth thresholds whose crossing probability is reported.
pub const WEALTH_THRESHOLDS: [f64; 3] = [100_000.0, 500_000.0, 1_000_000.0];

/// Derive an independent seed for one path from the run seed.
///
/// SplitMix-style golden-ratio mix, so every path owns its own random
/// stream and the path-to-draws assignment cannot depend on which thread
/// simulates it.
#[inline]
fn path_seed(seed: u64, path: u64) -> u64 {
    seed ^ (path.wrapping_add(1)).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Simulate `path_count` independent net-worth trajectories.
///
/// The monthly return model is `Normal(annual_return_pct/100/12,
/// annual_volatility_pct/100/sqrt(12))`. Note the simple-division mean:
/// this is deliberately not the geometric conversion used by the
/// deterministic projection, and the asymmetry is preserved as-is.
///
/// Per path, the recurrence is
/// `value[t+1] = max(value[t] * (1 + draw) + monthly_contribution, 0)`;
/// the floor models the no-borrowing assumption and wealth never goes
/// negative. Each path's draws come from one batched sample of its whole
/// return vector rather than a sample call per month.
pub fn simulate(
    initial: f64,
    monthly_contribution: f64,
    annual_return_pct: f64,
    annual_volatility_pct: f64,
    horizon_years: u32,
    path_count: usize,
    seed: u64,
) -> Result<SimulationEnsemble, SimulationError> {
    if path_count == 0 {
        return Err(SimulationError::ZeroPaths);
    }
    let months = horizon_years as usize * 12;
    if months == 0 {
        return Err(SimulationError::ZeroHorizon);
    }

    let mu = annual_return_pct / 100.0 / 12.0;
    let sigma = annual_volatility_pct / 100.0 / 12.0_f64.sqrt();
    let normal = Normal::new(mu, sigma).map_err(|_| SimulationError::InvalidVolatility {
        annual_volatility_pct,
    })?;

    let simulate_path = move |path: usize| -> Vec<f64> {
        let mut rng = SmallRng::seed_from_u64(path_seed(seed, path as u64));
        let draws: Vec<f64> = normal.sample_iter(&mut rng).take(months).collect();

        let mut values = Vec::with_capacity(months + 1);
        let mut value = initial;
        values.push(value);
        for draw in draws {
            value = (value * (1.0 + draw) + monthly_contribution).max(0.0);
            values.push(value);
        }
        values
    };

    #[cfg(feature = "parallel")]
    let paths: Vec<Vec<f64>> = (0..path_count).into_par_iter().map(simulate_path).collect();
    #[cfg(not(feature = "parallel"))]
    let paths: Vec<Vec<f64>> = (0..path_count).map(simulate_path).collect();

    debug!(path_count, months, seed, "monte carlo ensemble simulated");

    Ok(SimulationEnsemble::new(paths))
}

/// Reduce an ensemble to its outcome distribution: final-value
/// percentiles, threshold-crossing probabilities, and per-month percentile
/// bands (computed column-wise, independently of the final-value summary).
#[must_use]
pub fn summarize(ensemble: &SimulationEnsemble) -> MonteCarloSummary {
    let finals = ensemble.final_values();

    let mut sorted_finals = finals.to_vec();
    sorted_finals.sort_unstable_by(f64::total_cmp);
    let final_percentiles = FINAL_PERCENTILES
        .iter()
        .map(|&level| (level, percentile_sorted(&sorted_finals, level)))
        .collect();

    let threshold_probabilities = WEALTH_THRESHOLDS
        .iter()
        .map(|&threshold| {
            let hits = finals.iter().filter(|&&v| v >= threshold).count();
            (threshold, hits as f64 / finals.len() as f64 * 100.0)
        })
        .collect();

    let months = ensemble.months();
    let mut bands = PercentileBands {
        p10: Vec::with_capacity(months + 1),
        p25: Vec::with_capacity(months + 1),
        p50: Vec::with_capacity(months + 1),
        p75: Vec::with_capacity(months + 1),
        p90: Vec::with_capacity(months + 1),
    };

    let mut column = Vec::with_capacity(ensemble.path_count());
    for month in 0..=months {
        column.clear();
        column.extend(ensemble.paths().iter().map(|path| path[month]));
        column.sort_unstable_by(f64::total_cmp);
        bands.p10.push(percentile_sorted(&column, 10.0));
        bands.p25.push(percentile_sorted(&column, 25.0));
        bands.p50.push(percentile_sorted(&column, 50.0));
        bands.p75.push(percentile_sorted(&column, 75.0));
        bands.p90.push(percentile_sorted(&column, 90.0));
    }

    MonteCarloSummary {
        final_percentiles,
        threshold_probabilities,
        bands,
    }
}
