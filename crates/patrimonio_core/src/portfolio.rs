//! Portfolio aggregation: category sums and the productive-asset share.

use crate::model::{Account, AccountCategory, PortfolioSnapshot};

/// Overwrite the basket placeholder's balance with the resolved ETF total.
///
/// Exactly one account is expected to carry the `etf_basket` flag; this
/// must run before [`aggregate`] so the Investment total reflects the
/// basket's current value instead of the configured placeholder.
///
/// Returns `false` when no account is flagged, leaving the slice
/// untouched.
pub fn inject_etf_total(accounts: &mut [Account], etf_total: f64) -> bool {
    match accounts.iter_mut().find(|a| a.etf_basket) {
        Some(basket) => {
            basket.balance = etf_total;
            true
        }
        None => false,
    }
}

/// Reduce the account list to category totals and net worth.
///
/// Net worth is computed as the sum of the four category totals, which
/// keeps the partition identity exact. Balances are trusted inputs; there
/// are no error conditions here.
#[must_use]
pub fn aggregate(accounts: &[Account]) -> PortfolioSnapshot {
    let mut liquidity = 0.0;
    let mut investment = 0.0;
    let mut savings = 0.0;
    let mut severance_pay = 0.0;

    for account in accounts {
        match account.category {
            AccountCategory::Liquidity => liquidity += account.balance,
            AccountCategory::Investment => investment += account.balance,
            AccountCategory::Savings => savings += account.balance,
            AccountCategory::SeverancePay => severance_pay += account.balance,
        }
    }

    let net_worth = liquidity + investment + savings + severance_pay;
    let productive = investment + savings;
    let pct_productive = if net_worth > 0.0 {
        productive / net_worth * 100.0
    } else {
        0.0
    };

    PortfolioSnapshot {
        net_worth,
        liquidity,
        investment,
        savings,
        severance_pay,
        productive,
        pct_productive,
    }
}
