//! Summary command - statistics over the Not OK summary percentages.

use std::path::Path;

use colored::Colorize;
use verdict::summary::HistogramBucket;
use verdict::{Category, SummaryReport, Table};

use super::load_session;
use crate::cli::ReportInputs;

pub fn run(
    inputs: &ReportInputs,
    config: Option<&Path>,
    bins: Option<usize>,
    bottom: Option<usize>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = load_session(inputs, config)?;
    let summary = session
        .table(Category::Summary)
        .ok_or("No summary report was supplied (use --summary)")?;

    let buckets = bins.unwrap_or(session.config().histogram_buckets);
    let lowest = bottom.unwrap_or(session.config().bottom_n);
    let report = SummaryReport::build(&summary.table, &summary.schema, buckets, lowest);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Summary statistics:".yellow().bold());
    if report.statistics.is_empty() {
        println!("  {}", "No percentage columns found".dimmed());
    }
    for (field, stats) in &report.statistics {
        println!("  {} ({})", field.to_string().white().bold(), stats.header);
        println!(
            "    count {}  mean {}  std {}",
            stats.count,
            stats.mean.as_percent(),
            stats.std.as_percent()
        );
        println!(
            "    min {}  25% {}  50% {}  75% {}  max {}",
            stats.min.as_percent(),
            stats.q1.as_percent(),
            stats.median.as_percent(),
            stats.q3.as_percent(),
            stats.max.as_percent()
        );
    }
    println!();

    print_histogram(&report.data_match_histogram);

    println!(
        "{} {} paired points",
        "Date vs data match:".yellow().bold(),
        report.match_scatter.len()
    );
    println!();

    print_lowest(&report.lowest_data_match, lowest);
    Ok(())
}

fn print_histogram(buckets: &[HistogramBucket]) {
    println!("{}", "% data match distribution:".yellow().bold());
    let max = buckets.iter().map(|b| b.count).max().unwrap_or(0);
    if max == 0 {
        println!("  {}", "No data available".dimmed());
        println!();
        return;
    }

    for bucket in buckets {
        let filled = (bucket.count * 30).div_ceil(max);
        println!(
            "  {:>7.2} - {:>7.2}  {} {}",
            bucket.low,
            bucket.high,
            "█".repeat(filled).cyan(),
            bucket.count
        );
    }
    println!();
}

fn print_lowest(table: &Table, n: usize) {
    println!(
        "{}",
        format!("Datasets with lowest % data match (bottom {}):", n)
            .yellow()
            .bold()
    );
    if table.is_empty() {
        println!("  {}", "No data available".dimmed());
        return;
    }

    println!("  {}", table.headers().join(" | ").white().bold());
    for row in table.rows() {
        let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        println!("  {}", cells.join(" | "));
    }
}
