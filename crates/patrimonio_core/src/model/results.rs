//! Output types: aggregated snapshot, projection series, and the Monte
//! Carlo ensemble with its distilled summary.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Category totals and derived metrics for the portfolio at one point in
/// time. Built by [`aggregate`](crate::portfolio) after the ETF total has
/// been injected.
///
/// Invariant: `net_worth` is computed as the sum of the four category
/// totals, so `liquidity + investment + savings + severance_pay ==
/// net_worth` holds exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub net_worth: f64,
    pub liquidity: f64,
    pub investment: f64,
    pub savings: f64,
    pub severance_pay: f64,
    /// `investment + savings`: balances expected to earn a return.
    pub productive: f64,
    /// Productive share of net worth, in percent. Zero when net worth is
    /// not positive.
    pub pct_productive: f64,
}

/// Deterministic compound-growth forecast.
///
/// `values[0]` is the starting net worth; one entry per simulated month
/// thereafter, each rounded to cents the way a ledger posting monthly
/// would.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    pub values: Vec<f64>,
}

impl ProjectionSeries {
    /// Number of simulated months (series length minus the starting value).
    #[must_use]
    pub fn months(&self) -> usize {
        self.values.len() - 1
    }

    /// Value at the end of the horizon.
    #[must_use]
    pub fn final_value(&self) -> f64 {
        *self.values.last().unwrap_or(&0.0)
    }
}

/// One dated point of the projection, ready for charting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub date: Date,
    pub value: f64,
}

/// All paths produced by one Monte Carlo run.
///
/// Owned exclusively by that run and discarded once a summary has been
/// extracted; nothing here is persisted.
#[derive(Debug, Clone)]
pub struct SimulationEnsemble {
    paths: Vec<Vec<f64>>,
    final_values: Vec<f64>,
}

impl SimulationEnsemble {
    /// Wrap simulated paths. Every path must have the same length
    /// (`months + 1`, including the starting value).
    #[must_use]
    pub fn new(paths: Vec<Vec<f64>>) -> Self {
        let final_values = paths
            .iter()
            .map(|p| *p.last().unwrap_or(&0.0))
            .collect();
        Self {
            paths,
            final_values,
        }
    }

    #[must_use]
    pub fn paths(&self) -> &[Vec<f64>] {
        &self.paths
    }

    /// Last-month value of every path, in path order.
    #[must_use]
    pub fn final_values(&self) -> &[f64] {
        &self.final_values
    }

    #[must_use]
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Number of simulated months per path.
    #[must_use]
    pub fn months(&self) -> usize {
        self.paths.first().map_or(0, |p| p.len() - 1)
    }
}

/// Per-month percentile series across the ensemble, computed column-wise.
///
/// `p25`/`p75` draw the confidence ribbon; `p10`/`p50`/`p90` are the
/// pessimist/median/optimist lines. Each vector has `months + 1` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentileBands {
    pub p10: Vec<f64>,
    pub p25: Vec<f64>,
    pub p50: Vec<f64>,
    pub p75: Vec<f64>,
    pub p90: Vec<f64>,
}

/// Distilled Monte Carlo outcome distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloSummary {
    /// `(percentile, final value)` pairs for the final-month distribution,
    /// at the standard 10/25/50/75/90 levels.
    pub final_percentiles: Vec<(f64, f64)>,
    /// `(threshold, probability in percent)` that the final value reaches
    /// at least the threshold, for the standard 100k/500k/1M thresholds.
    pub threshold_probabilities: Vec<(f64, f64)>,
    pub bands: PercentileBands,
}

/// Tolerance for matching a percentile level or threshold in a summary.
const LOOKUP_TOLERANCE: f64 = 0.001;

impl MonteCarloSummary {
    /// Final value at a given percentile level, if that level was computed.
    #[must_use]
    pub fn final_percentile(&self, level: f64) -> Option<f64> {
        self.final_percentiles
            .iter()
            .find(|(p, _)| (*p - level).abs() < LOOKUP_TOLERANCE)
            .map(|(_, v)| *v)
    }

    /// Median final value. Zero only if the 50th percentile is missing,
    /// which the engine never produces.
    #[must_use]
    pub fn median_final(&self) -> f64 {
        self.final_percentile(50.0).unwrap_or(0.0)
    }

    /// Probability (in percent) that the final value reaches `threshold`,
    /// if that threshold was computed.
    #[must_use]
    pub fn probability_at_least(&self, threshold: f64) -> Option<f64> {
        self.threshold_probabilities
            .iter()
            .find(|(t, _)| (*t - threshold).abs() < LOOKUP_TOLERANCE)
            .map(|(_, p)| *p)
    }
}
