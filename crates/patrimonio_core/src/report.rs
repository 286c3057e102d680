//! Report building: marshal engine outputs into the shape the
//! presentation layer consumes. No algorithm of its own.

use jiff::ToSpan;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SimulationError;
use crate::milestone::{MONTHS_CAP, months_to_target, progress_pct};
use crate::model::{
    Account, Milestone, MilestoneProgress, MonteCarloSummary, PortfolioSnapshot, ProjectionPoint,
    SimulationParameters,
};
use crate::monte_carlo::{simulate, summarize};
use crate::portfolio::aggregate;
use crate::projection::project;

/// Everything the dashboard renders, produced by one synchronous pass:
/// aggregation, projection, milestone estimation, Monte Carlo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Report date; month 0 of every series.
    pub as_of: Date,
    pub snapshot: PortfolioSnapshot,
    pub milestones: Vec<MilestoneProgress>,
    /// Dated deterministic projection, one point per month.
    pub projection: Vec<ProjectionPoint>,
    pub simulation: MonteCarloSummary,
}

impl DashboardReport {
    /// Build the full report.
    ///
    /// The ETF total must already be injected into the account list (see
    /// [`inject_etf_total`](crate::portfolio::inject_etf_total)); price
    /// resolution is the caller's concern. `as_of` is passed in so this
    /// stays a pure function of its inputs.
    pub fn build(
        accounts: &[Account],
        milestones: &[Milestone],
        params: &SimulationParameters,
        projection_years: u32,
        as_of: Date,
    ) -> Result<Self, SimulationError> {
        let snapshot = aggregate(accounts);
        let contribution = params.total_monthly_contribution();

        let series = project(
            snapshot.net_worth,
            contribution,
            params.annual_return_pct,
            projection_years,
        );
        let projection = series
            .values
            .iter()
            .enumerate()
            .map(|(month, &value)| ProjectionPoint {
                date: add_months(as_of, month as u32),
                value,
            })
            .collect();

        let milestones: Vec<MilestoneProgress> = milestones
            .iter()
            .map(|m| {
                milestone_progress(
                    m,
                    snapshot.net_worth,
                    contribution,
                    params.annual_return_pct,
                    as_of,
                )
            })
            .collect();

        let ensemble = simulate(
            snapshot.net_worth,
            contribution,
            params.annual_return_pct,
            params.annual_volatility_pct,
            params.horizon_years,
            params.path_count,
            params.seed,
        )?;
        let simulation = summarize(&ensemble);

        debug!(
            net_worth = snapshot.net_worth,
            milestones = milestones.len(),
            "dashboard report built"
        );

        Ok(Self {
            as_of,
            snapshot,
            milestones,
            projection,
            simulation,
        })
    }
}

fn add_months(date: Date, months: u32) -> Date {
    date.saturating_add((i64::from(months)).months())
}

/// Progress and time-to-target for one milestone. The search cap comes
/// back as `None` for both the month count and the ETA.
fn milestone_progress(
    milestone: &Milestone,
    net_worth: f64,
    monthly_contribution: f64,
    annual_return_pct: f64,
    as_of: Date,
) -> MilestoneProgress {
    let months = months_to_target(
        net_worth,
        milestone.target,
        monthly_contribution,
        annual_return_pct,
        MONTHS_CAP,
    );
    let (months_to_target, eta) = if months >= MONTHS_CAP {
        (None, None)
    } else {
        (Some(months), Some(add_months(as_of, months)))
    };

    MilestoneProgress {
        label: milestone.label.clone(),
        reward: milestone.reward.clone(),
        target: milestone.target,
        progress_pct: progress_pct(net_worth, milestone.target),
        months_to_target,
        eta,
    }
}
