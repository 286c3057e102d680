//! Portfolio holdings: labeled account balances and the tracked ETF basket.
//!
//! Everything here is static configuration from the caller's point of view.
//! Balances are trusted inputs; the shell validates non-negativity before
//! handing a portfolio to the engine.

use serde::{Deserialize, Serialize};

/// Category an account balance belongs to.
///
/// The four categories partition net worth; `Investment` and `Savings`
/// together form the "productive" share that is expected to earn a return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountCategory {
    /// Cash and near-cash: checking accounts, prepaid cards, physical cash.
    Liquidity,
    /// Broker and lending-platform balances.
    Investment,
    /// Capital-protected savings products.
    Savings,
    /// Accrued severance pay (TFR).
    SeverancePay,
}

impl AccountCategory {
    /// Display label for rendering.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AccountCategory::Liquidity => "Liquidity",
            AccountCategory::Investment => "Investment",
            AccountCategory::Savings => "Savings",
            AccountCategory::SeverancePay => "Severance pay",
        }
    }
}

/// A single labeled balance in the portfolio.
///
/// Immutable for the duration of one report generation, with one exception:
/// the account flagged `etf_basket` has its balance overwritten with the
/// resolved ETF total before aggregation (see
/// [`inject_etf_total`](crate::portfolio::inject_etf_total)).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    /// Balance in currency units. Non-negative for real accounts; the
    /// basket placeholder usually starts at zero.
    pub balance: f64,
    pub category: AccountCategory,
    /// Marks the one account whose balance is the ETF-basket placeholder.
    #[serde(default)]
    pub etf_basket: bool,
}

/// One tracked ETF line inside the basket account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EtfPosition {
    pub name: String,
    /// Whole shares held.
    pub shares: u32,
    /// Last manually recorded value of the whole line, in currency units.
    /// Used whenever no live quote is available; a position without a
    /// ticker always resolves to exactly this value.
    pub backup_value: f64,
    /// Asset-class label (e.g. "US equity", "Gold"), for display grouping.
    pub asset_class: String,
    /// Market identifier for live quoting, when one exists.
    #[serde(default)]
    pub ticker: Option<String>,
    /// Currency-conversion pair for listings not quoted in EUR.
    #[serde(default)]
    pub fx_ticker: Option<String>,
}
