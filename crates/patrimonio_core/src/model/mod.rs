mod accounts;
mod milestones;
mod params;
mod results;

pub use accounts::{Account, AccountCategory, EtfPosition};
pub use milestones::{Milestone, MilestoneProgress};
pub use params::SimulationParameters;
pub use results::{
    MonteCarloSummary, PercentileBands, PortfolioSnapshot, ProjectionPoint, ProjectionSeries,
    SimulationEnsemble,
};
