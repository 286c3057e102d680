//! Wealth milestones and the per-milestone progress report.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A target net-worth threshold with an associated reward label.
///
/// Static configuration; read-only input to the milestone estimator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub label: String,
    /// Net worth that marks the milestone as reached, in currency units.
    pub target: f64,
    /// What crossing the threshold unlocks, verbatim from configuration.
    pub reward: String,
}

/// Progress toward one milestone at report time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneProgress {
    pub label: String,
    pub reward: String,
    pub target: f64,
    /// `min(net_worth / target * 100, 100)`.
    pub progress_pct: f64,
    /// Months until the projection crosses the target. `None` when the
    /// recurrence did not reach the target within the search cap, which
    /// callers must render as "not reached", never as an estimate.
    pub months_to_target: Option<u32>,
    /// Estimated calendar date of the crossing, when one exists.
    pub eta: Option<Date>,
}

impl MilestoneProgress {
    /// Time-to-target as a `(years, months)` breakdown.
    #[must_use]
    pub fn duration(&self) -> Option<(u32, u32)> {
        self.months_to_target.map(|m| (m / 12, m % 12))
    }
}
