//! Plain-text rendering of the dashboard report.
//!
//! Pure string building: everything here takes the finished report and
//! formats it, so rendering is testable without touching stdout.

use patrimonio_core::model::MilestoneProgress;
use patrimonio_core::report::DashboardReport;

use crate::config::PortfolioConfig;
use crate::prices::Resolution;

/// Format a value as whole euros with thousands separators.
#[must_use]
pub fn format_eur(value: f64) -> String {
    let rounded = value.abs().round() as i64;
    let digits = rounded.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if value < 0.0 {
        format!("-€{grouped}")
    } else {
        format!("€{grouped}")
    }
}

/// A `[#####.....]` bar for a 0-100 percentage.
#[must_use]
pub fn progress_bar(pct: f64, width: usize) -> String {
    let clamped = pct.clamp(0.0, 100.0);
    let filled = (clamped / 100.0 * width as f64).round() as usize;
    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    for i in 0..width {
        bar.push(if i < filled { '#' } else { '.' });
    }
    bar.push(']');
    bar
}

fn milestone_line(m: &MilestoneProgress) -> String {
    let status = match (m.months_to_target, m.duration()) {
        (Some(0), _) => "reached".to_string(),
        (Some(_), Some((years, months))) => {
            let eta = m
                .eta
                .map(|d| d.strftime("%b %Y").to_string())
                .unwrap_or_default();
            format!("~{years}y {months}m -> {eta}")
        }
        _ => "not reached within the 100-year cap".to_string(),
    };
    format!(
        "  {:<6} {} {:>5.1}%  {}  ({})",
        m.label,
        progress_bar(m.progress_pct, 20),
        m.progress_pct,
        status,
        m.reward
    )
}

/// Render the full text dashboard.
#[must_use]
pub fn render_dashboard(
    report: &DashboardReport,
    config: &PortfolioConfig,
    resolution: &Resolution,
) -> String {
    let mut out = String::new();
    let snapshot = &report.snapshot;
    let sim = &config.simulation;

    if !resolution.diagnostics.is_empty() {
        out.push_str("warnings:\n");
        for diagnostic in &resolution.diagnostics {
            out.push_str(&format!("  - {diagnostic}\n"));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "Net worth {} as of {}\n",
        format_eur(snapshot.net_worth),
        report.as_of.strftime("%d/%m/%Y")
    ));
    out.push_str(&format!(
        "  productive {} ({:.0}%), liquidity {}, severance {}\n\n",
        format_eur(snapshot.productive),
        snapshot.pct_productive,
        format_eur(snapshot.liquidity),
        format_eur(snapshot.severance_pay)
    ));

    out.push_str("Categories\n");
    let categories = [
        ("Liquidity", snapshot.liquidity),
        ("Investment", snapshot.investment),
        ("Savings", snapshot.savings),
        ("Severance pay", snapshot.severance_pay),
    ];
    for (label, total) in categories {
        let share = if snapshot.net_worth > 0.0 {
            total / snapshot.net_worth * 100.0
        } else {
            0.0
        };
        out.push_str(&format!(
            "  {label:<14} {:>12}  {share:>5.1}%\n",
            format_eur(total)
        ));
    }
    out.push('\n');

    if !config.etf_positions.is_empty() {
        let total = resolution.total();
        out.push_str(&format!("ETF basket (total {})\n", format_eur(total)));
        let name_width = config
            .etf_positions
            .iter()
            .map(|p| p.name.len())
            .max()
            .unwrap_or(0);
        for position in &config.etf_positions {
            let value = resolution.value_of(&position.name);
            let weight = if total > 0.0 { value / total * 100.0 } else { 0.0 };
            out.push_str(&format!(
                "  {:<name_width$} {:>10}  {weight:>5.1}%  {}\n",
                position.name,
                format_eur(value),
                position.asset_class
            ));
        }
        out.push('\n');
    }

    if !report.milestones.is_empty() {
        out.push_str("Milestones\n");
        for milestone in &report.milestones {
            out.push_str(&milestone_line(milestone));
            out.push('\n');
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "Projection ({}/month at {}%/yr)\n",
        format_eur(sim.total_monthly_contribution()),
        sim.annual_return_pct
    ));
    for years in [1_usize, 5, 10, config.projection_years as usize] {
        let month = years * 12;
        if let Some(point) = report.projection.get(month) {
            out.push_str(&format!(
                "  {years:>3} year{} {:>14}\n",
                if years == 1 { " " } else { "s" },
                format_eur(point.value)
            ));
        }
    }
    out.push('\n');

    out.push_str(&format!(
        "Monte Carlo ({} paths, {} years, {}% volatility)\n",
        sim.path_count, sim.horizon_years, sim.annual_volatility_pct
    ));
    for &(threshold, probability) in &report.simulation.threshold_probabilities {
        out.push_str(&format!(
            "  P(final >= {:>8}) {probability:>5.1}%\n",
            format_eur(threshold)
        ));
    }
    out.push_str(&format!(
        "  median after {} years: {}\n",
        sim.horizon_years,
        format_eur(report.simulation.median_final())
    ));
    out.push_str("  final value percentiles:");
    for &(level, value) in &report.simulation.final_percentiles {
        out.push_str(&format!("  p{level:.0} {}", format_eur(value)));
    }
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use patrimonio_core::report::DashboardReport;

    use super::*;
    use crate::prices::{BackupResolver, PriceResolver};

    #[test]
    fn test_format_eur() {
        assert_eq!(format_eur(0.0), "€0");
        assert_eq!(format_eur(999.4), "€999");
        assert_eq!(format_eur(27_050.0), "€27,050");
        assert_eq!(format_eur(1_234_567.89), "€1,234,568");
        assert_eq!(format_eur(-1_500.0), "-€1,500");
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.0, 10), "[..........]");
        assert_eq!(progress_bar(50.0, 10), "[#####.....]");
        assert_eq!(progress_bar(100.0, 10), "[##########]");
        // Out-of-range values clamp instead of overflowing the bar.
        assert_eq!(progress_bar(250.0, 10), "[##########]");
        assert_eq!(progress_bar(-10.0, 10), "[..........]");
    }

    #[test]
    fn test_render_smoke() {
        let mut config = PortfolioConfig::sample();
        config.simulation.path_count = 50;
        config.simulation.horizon_years = 5;

        let resolution = BackupResolver.resolve(&config.etf_positions);
        patrimonio_core::portfolio::inject_etf_total(&mut config.accounts, resolution.total());

        let report = DashboardReport::build(
            &config.accounts,
            &config.milestones,
            &config.simulation,
            config.projection_years,
            date(2026, 8, 6),
        )
        .unwrap();

        let text = render_dashboard(&report, &config, &resolution);
        assert!(text.contains("Net worth"));
        assert!(text.contains("06/08/2026"));
        assert!(text.contains("ETF basket"));
        assert!(text.contains("Milestones"));
        assert!(text.contains("Porsche Panamera"));
        assert!(text.contains("Monte Carlo (50 paths, 5 years"));
        assert!(text.contains("warnings:"));
    }
}
