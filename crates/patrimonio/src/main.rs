//! Command-line dashboard: load the portfolio, resolve the ETF basket,
//! run the engine once, and print the result.

use std::path::PathBuf;

use clap::Parser;

use patrimonio_core::portfolio::inject_etf_total;
use patrimonio_core::report::DashboardReport;

mod config;
mod logging;
mod prices;
mod render;

use config::PortfolioConfig;
use prices::{BackupResolver, PriceResolver};

#[derive(Parser, Debug)]
#[command(name = "patrimonio")]
#[command(about = "Personal net-worth dashboard with projection and Monte Carlo stress test")]
struct Args {
    /// Path to the portfolio YAML (default: the built-in sample portfolio)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Monthly contribution override (EUR)
    #[arg(long)]
    contribution: Option<f64>,

    /// Extra monthly income override (EUR)
    #[arg(long)]
    extra_income: Option<f64>,

    /// Expected annual return override (percent)
    #[arg(long)]
    annual_return: Option<f64>,

    /// Annual volatility override (percent)
    #[arg(long)]
    volatility: Option<f64>,

    /// Simulation seed override
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the report as JSON instead of the text dashboard
    #[arg(long)]
    json: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn apply_overrides(&self, config: &mut PortfolioConfig) {
        let sim = &mut config.simulation;
        if let Some(contribution) = self.contribution {
            sim.monthly_contribution = contribution;
        }
        if let Some(extra) = self.extra_income {
            sim.extra_monthly_income = extra;
        }
        if let Some(annual_return) = self.annual_return {
            sim.annual_return_pct = annual_return;
        }
        if let Some(volatility) = self.volatility {
            sim.annual_volatility_pct = volatility;
        }
        if let Some(seed) = self.seed {
            sim.seed = seed;
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init(&args.log_level);

    let mut config = match &args.config {
        Some(path) => PortfolioConfig::load(path)?,
        None => {
            tracing::info!("no portfolio file given, using the built-in sample");
            PortfolioConfig::sample()
        }
    };
    args.apply_overrides(&mut config);
    config.validate()?;

    let resolution = BackupResolver.resolve(&config.etf_positions);
    for diagnostic in &resolution.diagnostics {
        tracing::warn!("{diagnostic}");
    }
    if !inject_etf_total(&mut config.accounts, resolution.total()) && !config.etf_positions.is_empty()
    {
        tracing::warn!("no ETF-basket account found, basket total not injected");
    }

    let as_of = jiff::Zoned::now().date();
    let report = DashboardReport::build(
        &config.accounts,
        &config.milestones,
        &config.simulation,
        config.projection_years,
        as_of,
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::render_dashboard(&report, &config, &resolution));
    }

    Ok(())
}
