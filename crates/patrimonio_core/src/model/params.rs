//! Simulation parameters supplied by the caller.

use serde::{Deserialize, Serialize};

/// Everything the projection and Monte Carlo engines need beyond the
/// portfolio itself. Typically driven by UI sliders; the ranges observed
/// there are contribution 100-3000, return 3-15%, volatility 5-30%,
/// extra income 0-5000.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Fixed monthly contribution, in currency units.
    pub monthly_contribution: f64,
    /// Additional monthly income routed into the portfolio (side projects).
    pub extra_monthly_income: f64,
    /// Expected nominal annual return, as a percentage (7.0 = 7%).
    pub annual_return_pct: f64,
    /// Estimated annual volatility, as a percentage.
    pub annual_volatility_pct: f64,
    /// Monte Carlo horizon in years.
    pub horizon_years: u32,
    /// Number of independent simulated paths.
    pub path_count: usize,
    /// Seed for the simulation's random draws. Same seed, same ensemble.
    pub seed: u64,
}

impl SimulationParameters {
    /// Contribution plus extra income: the amount actually posted monthly.
    #[must_use]
    pub fn total_monthly_contribution(&self) -> f64 {
        self.monthly_contribution + self.extra_monthly_income
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            monthly_contribution: 600.0,
            extra_monthly_income: 0.0,
            annual_return_pct: 7.0,
            annual_volatility_pct: 14.0,
            horizon_years: 25,
            path_count: 1000,
            seed: 42,
        }
    }
}
