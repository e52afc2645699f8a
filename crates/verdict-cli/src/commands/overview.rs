//! Overview command - headline metrics and chart data.

use std::path::Path;

use colored::{Color, Colorize};
use verdict::ChartDataset;

use super::{load_session, require_ready};
use crate::cli::ReportInputs;

/// Success rates at or above this are shown as healthy.
const HEALTHY_SUCCESS_RATE: f64 = 70.0;

pub fn run(
    inputs: &ReportInputs,
    config: Option<&Path>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = load_session(inputs, config)?;
    require_ready(&session)?;

    let overview = session.overview();

    if json_output {
        let output = serde_json::json!({
            "metrics": overview.metrics,
            "run_date": overview.run_date,
            "category_split": overview.category_split,
            "case_distribution": overview.case_distribution,
            "ingest_types": overview.ingest_types,
            "status_flags": overview.status_flags.to_dataset(),
            "max_dates": overview.max_dates,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let metrics = &overview.metrics;
    println!(
        "{} {}",
        "OCL validation overview, sanity run".cyan().bold(),
        overview.run_date.white()
    );
    println!();
    println!("  Total datasets: {}", metrics.total.to_string().white().bold());
    println!("  OK:             {}", metrics.ok.to_string().green());
    println!("  Partial OK:     {}", metrics.partial_ok.to_string().yellow());
    println!("  Not OK:         {}", metrics.not_ok.to_string().red());

    let rate = format!("{:.1}%", metrics.success_rate);
    println!("  Success rate:   {}", rate.color(rate_color(metrics.success_rate)));
    println!();

    print_single_series("Case distribution", &overview.case_distribution);
    print_cross_tab("Ingest type by category", &overview.ingest_types);
    print_single_series("Status flags", &overview.status_flags.to_dataset());
    print_cross_tab("Max date status by category", &overview.max_dates);

    Ok(())
}

/// One bar per label, scaled to the largest count.
fn print_single_series(title: &str, dataset: &ChartDataset) {
    println!("{}", format!("{}:", title).yellow().bold());
    if dataset.is_empty() {
        println!("  {}", "No data available".dimmed());
        println!();
        return;
    }

    let max = dataset.iter().map(|p| p.count).max().unwrap_or(0).max(1);
    let width = dataset.iter().map(|p| p.dimension.len()).max().unwrap_or(0);
    for point in dataset.iter() {
        let filled = (point.count * 30).div_ceil(max);
        println!(
            "  {:<width$}  {} {}",
            point.dimension,
            "█".repeat(filled).cyan(),
            point.count,
            width = width
        );
    }
    println!();
}

/// Counts grouped by category, one line per dimension value.
fn print_cross_tab(title: &str, dataset: &ChartDataset) {
    println!("{}", format!("{}:", title).yellow().bold());
    if dataset.is_empty() {
        println!("  {}", "No data available".dimmed());
        println!();
        return;
    }

    for category in dataset.dimensions() {
        println!("  {}", category.white().bold());
        for point in dataset.iter().filter(|p| p.dimension == category) {
            println!("    {}: {}", point.series, point.count);
        }
    }
    println!();
}

/// OK colour for a healthy success rate, the Partial OK colour otherwise.
fn rate_color(success_rate: f64) -> Color {
    if success_rate >= HEALTHY_SUCCESS_RATE {
        Color::Green
    } else {
        Color::Yellow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_color_threshold() {
        assert_eq!(rate_color(70.0), Color::Green);
        assert_eq!(rate_color(100.0), Color::Green);
        assert_eq!(rate_color(69.9), Color::Yellow);
        assert_eq!(rate_color(0.0), Color::Yellow);
    }
}
