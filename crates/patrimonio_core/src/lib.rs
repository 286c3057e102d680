//! Net-worth dashboard engine
//!
//! This crate is the computational core behind a single-snapshot personal
//! finance dashboard. It takes a manually maintained portfolio (bank and
//! broker balances plus a small tracked ETF basket) and produces:
//! - category totals and the productive-asset share of net worth
//! - a deterministic compound-growth projection of future net worth
//! - time-to-target estimates for a set of wealth milestones
//! - a Monte Carlo stress test of the projection under a normal
//!   monthly-return model, summarized as percentile bands and
//!   threshold-crossing probabilities
//!
//! The crate is a pure function of its inputs: no clock reads, no I/O, no
//! global state. Price resolution and rendering live in the `patrimonio`
//! shell crate.
//!
//! # Example
//!
//! ```ignore
//! use patrimonio_core::model::SimulationParameters;
//! use patrimonio_core::report::DashboardReport;
//!
//! let params = SimulationParameters::default();
//! let report = DashboardReport::build(
//!     &accounts,
//!     &milestones,
//!     &params,
//!     30,
//!     jiff::civil::date(2026, 8, 1),
//! )?;
//! println!("median after {} years: {}", params.horizon_years, report.simulation.median_final());
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod milestone;
pub mod monte_carlo;
pub mod portfolio;
pub mod projection;
pub mod report;
pub mod stats;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::SimulationError;
pub use model::{
    Account, AccountCategory, EtfPosition, Milestone, PortfolioSnapshot, SimulationParameters,
};
pub use report::DashboardReport;
