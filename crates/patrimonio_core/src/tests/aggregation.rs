//! Tests for portfolio aggregation and ETF-total injection.

use crate::model::{Account, AccountCategory};
use crate::portfolio::{aggregate, inject_etf_total};

fn sample_accounts() -> Vec<Account> {
    let account = |name: &str, balance: f64, category, etf_basket| Account {
        name: name.to_string(),
        balance,
        category,
        etf_basket,
    };
    vec![
        account("Postepay", 1_000.0, AccountCategory::Liquidity, false),
        account("Buddybank", 400.0, AccountCategory::Liquidity, false),
        account("Revolut", 3_000.0, AccountCategory::Liquidity, false),
        account("Cash", 2_500.0, AccountCategory::Liquidity, false),
        account("Degiro", 0.0, AccountCategory::Investment, true),
        account("Bondora", 4_400.0, AccountCategory::Investment, false),
        account("Postal bond", 14_000.0, AccountCategory::Savings, false),
        account("TFR", 2_000.0, AccountCategory::SeverancePay, false),
    ]
}

/// The four category totals partition net worth exactly.
#[test]
fn test_partition_identity() {
    let snapshot = aggregate(&sample_accounts());
    assert_eq!(
        snapshot.net_worth,
        snapshot.liquidity + snapshot.investment + snapshot.savings + snapshot.severance_pay
    );
    assert_eq!(snapshot.liquidity, 6_900.0);
    assert_eq!(snapshot.investment, 4_400.0);
    assert_eq!(snapshot.savings, 14_000.0);
    assert_eq!(snapshot.severance_pay, 2_000.0);
    assert_eq!(snapshot.net_worth, 27_300.0);
}

/// Productive assets are investments plus savings, and the share is
/// relative to net worth.
#[test]
fn test_productive_share() {
    let snapshot = aggregate(&sample_accounts());
    assert_eq!(snapshot.productive, 18_400.0);
    let expected_pct = 18_400.0 / 27_300.0 * 100.0;
    assert!((snapshot.pct_productive - expected_pct).abs() < 1e-12);
}

/// A worthless portfolio reports a zero productive share instead of
/// dividing by zero.
#[test]
fn test_zero_net_worth_pct_is_zero() {
    let accounts = vec![Account {
        name: "Empty".to_string(),
        balance: 0.0,
        category: AccountCategory::Liquidity,
        etf_basket: false,
    }];
    let snapshot = aggregate(&accounts);
    assert_eq!(snapshot.net_worth, 0.0);
    assert_eq!(snapshot.pct_productive, 0.0);
}

/// Injection overwrites exactly the flagged placeholder.
#[test]
fn test_inject_etf_total() {
    let mut accounts = sample_accounts();
    assert!(inject_etf_total(&mut accounts, 11_964.99));

    let basket = accounts.iter().find(|a| a.etf_basket).unwrap();
    assert_eq!(basket.balance, 11_964.99);
    // Other accounts untouched.
    assert_eq!(accounts[5].balance, 4_400.0);

    let snapshot = aggregate(&accounts);
    assert_eq!(snapshot.investment, 4_400.0 + 11_964.99);
}

/// Without a flagged basket the injection is a no-op and says so.
#[test]
fn test_inject_without_basket() {
    let mut accounts = sample_accounts();
    for a in &mut accounts {
        a.etf_basket = false;
    }
    assert!(!inject_etf_total(&mut accounts, 11_964.99));
    assert_eq!(aggregate(&accounts).investment, 4_400.0);
}
