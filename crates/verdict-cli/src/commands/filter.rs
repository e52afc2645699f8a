//! Filter command - filter one report and write the matches as CSV.

use std::path::{Path, PathBuf};

use colored::Colorize;
use verdict::export::filtered_file_name;
use verdict::{Category, FilterSpec, UniqueCount, to_delimited_bytes};

use super::load_session;
use crate::cli::{FilterArgs, ReportInputs};

pub fn run(
    report: Category,
    inputs: &ReportInputs,
    config: Option<&Path>,
    selection: &FilterArgs,
    output: Option<PathBuf>,
    list_options: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = load_session(inputs, config)?;

    if session.table(report).is_none() {
        return Err(format!("No {} report was supplied", report.label()).into());
    }

    if list_options {
        for field in FilterArgs::FIELDS {
            let values = session.filter_options(report, field);
            if values.is_empty() {
                continue;
            }
            println!("{}", format!("{}:", field).yellow().bold());
            for value in values {
                println!("  {}", value);
            }
        }
        return Ok(());
    }

    let criteria = selection.to_criteria();
    let spec = FilterSpec::build(&criteria);
    if let Some(term) = spec.search() {
        eprintln!("  Dataset ID contains '{}'", term);
    }
    for (field, clause) in spec.clauses() {
        eprintln!("  {}", clause.description(field));
    }

    let view = session
        .filtered_view(report, &criteria)
        .ok_or_else(|| format!("No {} report was supplied", report.label()))?;

    let datasets = match view.unique_datasets {
        UniqueCount::Distinct(n) => format!("{} unique datasets", n),
        UniqueCount::RowCount(n) => format!("{} rows, no Dataset ID column", n),
    };
    eprintln!(
        "Showing {} records ({})",
        view.records.to_string().white().bold(),
        datasets
    );

    let output = output.unwrap_or_else(|| PathBuf::from(filtered_file_name(report)));
    let bytes = to_delimited_bytes(&view.table)?;
    std::fs::write(&output, bytes)?;
    tracing::debug!(path = %output.display(), "wrote filtered report");

    eprintln!("{} {}", "Wrote".green(), output.display());
    Ok(())
}
