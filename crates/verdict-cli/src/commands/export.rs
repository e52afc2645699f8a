//! Export command - write the loaded reports to one workbook.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use colored::Colorize;
use verdict::export::report_file_name;
use verdict::to_workbook;

use super::load_session;
use crate::cli::ReportInputs;

pub fn run(
    inputs: &ReportInputs,
    config: Option<&Path>,
    output_dir: PathBuf,
    date: Option<NaiveDate>,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = load_session(inputs, config)?;

    let bundle = session.export_bundle();
    if bundle.is_empty() {
        return Err("Nothing to export: every supplied report is empty".into());
    }

    let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
    let path = output_dir.join(report_file_name(date));
    let bytes = to_workbook(&bundle)?;
    std::fs::write(&path, bytes)?;
    tracing::debug!(path = %path.display(), sheets = bundle.len(), "wrote workbook");

    println!(
        "{} {} ({} sheets)",
        "Wrote".green(),
        path.display().to_string().white().bold(),
        bundle.len()
    );
    Ok(())
}
