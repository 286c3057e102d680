//! Portfolio configuration: the YAML file that describes accounts, the
//! tracked ETF basket, milestones, and simulation defaults.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use patrimonio_core::model::{
    Account, AccountCategory, EtfPosition, Milestone, SimulationParameters,
};

fn default_projection_years() -> u32 {
    30
}

/// Everything one report generation needs, as loaded from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioConfig {
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub etf_positions: Vec<EtfPosition>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub simulation: SimulationParameters,
    /// Horizon of the deterministic projection, independent of the Monte
    /// Carlo horizon.
    #[serde(default = "default_projection_years")]
    pub projection_years: u32,
}

impl PortfolioConfig {
    /// Load and parse a YAML portfolio file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_saphyr::from_str(&content)?;
        Ok(config)
    }

    /// Check the invariants the engine assumes: non-negative balances,
    /// a single ETF-basket placeholder, positive milestone targets, and
    /// usable simulation parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.accounts.is_empty() {
            return Err(ConfigError::Invalid("no accounts configured".to_string()));
        }
        for account in &self.accounts {
            if account.balance < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "account '{}' has a negative balance",
                    account.name
                )));
            }
        }

        let baskets = self.accounts.iter().filter(|a| a.etf_basket).count();
        if !self.etf_positions.is_empty() && baskets != 1 {
            return Err(ConfigError::Invalid(format!(
                "expected exactly one ETF-basket account, found {baskets}"
            )));
        }
        for position in &self.etf_positions {
            if position.backup_value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "ETF position '{}' has a negative backup value",
                    position.name
                )));
            }
        }

        for milestone in &self.milestones {
            if milestone.target <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "milestone '{}' has a non-positive target",
                    milestone.label
                )));
            }
        }

        let sim = &self.simulation;
        if sim.monthly_contribution < 0.0 || sim.extra_monthly_income < 0.0 {
            return Err(ConfigError::Invalid(
                "contributions must be non-negative".to_string(),
            ));
        }
        if sim.path_count == 0 {
            return Err(ConfigError::Invalid(
                "simulation path count must be at least 1".to_string(),
            ));
        }
        if sim.horizon_years == 0 {
            return Err(ConfigError::Invalid(
                "simulation horizon must be at least 1 year".to_string(),
            ));
        }
        if self.projection_years == 0 {
            return Err(ConfigError::Invalid(
                "projection horizon must be at least 1 year".to_string(),
            ));
        }

        Ok(())
    }

    /// The built-in sample portfolio, used when no config file is given.
    #[must_use]
    pub fn sample() -> Self {
        let account = |name: &str, balance: f64, category: AccountCategory| Account {
            name: name.to_string(),
            balance,
            category,
            etf_basket: false,
        };
        let position = |name: &str,
                        shares: u32,
                        backup_value: f64,
                        asset_class: &str,
                        ticker: Option<&str>,
                        fx_ticker: Option<&str>| EtfPosition {
            name: name.to_string(),
            shares,
            backup_value,
            asset_class: asset_class.to_string(),
            ticker: ticker.map(str::to_string),
            fx_ticker: fx_ticker.map(str::to_string),
        };
        let milestone = |label: &str, target: f64, reward: &str| Milestone {
            label: label.to_string(),
            target,
            reward: reward.to_string(),
        };

        Self {
            accounts: vec![
                account("Postepay Evolution", 1_000.0, AccountCategory::Liquidity),
                account("Buddybank", 400.0, AccountCategory::Liquidity),
                account("Revolut", 3_000.0, AccountCategory::Liquidity),
                account("Isybank", 700.0, AccountCategory::Liquidity),
                account("Contanti", 2_500.0, AccountCategory::Liquidity),
                Account {
                    name: "Degiro".to_string(),
                    balance: 0.0,
                    category: AccountCategory::Investment,
                    etf_basket: true,
                },
                account("Scalable Capital", 50.0, AccountCategory::Investment),
                account("Bondora", 4_400.0, AccountCategory::Investment),
                account(
                    "Buono Fruttifero Postale",
                    14_000.0,
                    AccountCategory::Savings,
                ),
                account("TFR Lavoro", 2_000.0, AccountCategory::SeverancePay),
            ],
            etf_positions: vec![
                position(
                    "Vanguard S&P 500 UCITS ETF",
                    64,
                    7_099.07,
                    "US equity",
                    Some("VUSA.AS"),
                    None,
                ),
                position(
                    "VanEck Semiconductor UCITS ETF",
                    23,
                    1_423.02,
                    "Tech sector",
                    None,
                    None,
                ),
                position(
                    "Vanguard FTSE All-World High Dividend",
                    14,
                    1_068.03,
                    "Global dividend",
                    Some("VHYL.AS"),
                    None,
                ),
                position(
                    "Xtrackers AI & Big Data",
                    7,
                    1_066.24,
                    "AI sector",
                    Some("XAIX.DE"),
                    None,
                ),
                position(
                    "iShares Physical Gold ETC",
                    6,
                    503.26,
                    "Gold",
                    Some("IGLN.L"),
                    Some("GBPEUR=X"),
                ),
                position(
                    "iShares Core Global Aggregate Bond",
                    100,
                    498.31,
                    "Bonds",
                    Some("AGGH.AS"),
                    None,
                ),
                position(
                    "iShares MSCI China A",
                    60,
                    307.06,
                    "China equity",
                    Some("CNYA.AS"),
                    None,
                ),
            ],
            milestones: vec![
                milestone("€50k", 50_000.0, "Audi A3"),
                milestone("€100k", 100_000.0, "Dualframe upgrade"),
                milestone("€400k", 400_000.0, "Audi Q8"),
                milestone("€1M", 1_000_000.0, "Porsche Panamera"),
            ],
            simulation: SimulationParameters::default(),
            projection_years: default_projection_years(),
        }
    }
}

/// Errors loading or validating a portfolio file.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_saphyr::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read portfolio file: {e}"),
            ConfigError::Parse(e) => write!(f, "cannot parse portfolio file: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid portfolio: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_saphyr::Error> for ConfigError {
    fn from(e: serde_saphyr::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_sample_is_valid() {
        let config = PortfolioConfig::sample();
        config.validate().unwrap();
        assert_eq!(config.accounts.len(), 10);
        assert_eq!(config.etf_positions.len(), 7);
        assert_eq!(config.milestones.len(), 4);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = PortfolioConfig::sample();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: PortfolioConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(parsed.accounts.len(), config.accounts.len());
        assert_eq!(parsed.simulation, config.simulation);
        assert_eq!(parsed.projection_years, config.projection_years);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let yaml = serde_saphyr::to_string(&PortfolioConfig::sample()).unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = PortfolioConfig::load(file.path()).unwrap();
        config.validate().unwrap();
        assert_eq!(config.accounts.len(), 10);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PortfolioConfig::load(Path::new("/nonexistent/portfolio.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_validate_rejects_negative_balance() {
        let mut config = PortfolioConfig::sample();
        config.accounts[0].balance = -1.0;
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::Invalid(_)
        ));
    }

    #[test]
    fn test_validate_requires_single_basket() {
        let mut config = PortfolioConfig::sample();
        config.accounts[5].etf_basket = false;
        assert!(config.validate().is_err());

        config.accounts[5].etf_basket = true;
        config.accounts[6].etf_basket = true;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_paths() {
        let mut config = PortfolioConfig::sample();
        config.simulation.path_count = 0;
        assert!(config.validate().is_err());
    }
}
