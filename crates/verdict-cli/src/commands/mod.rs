//! CLI command implementations.

pub mod export;
pub mod filter;
pub mod overview;
pub mod summary;

use std::path::Path;

use colored::Colorize;
use verdict::{Session, VerdictConfig};

use crate::cli::ReportInputs;

/// Load the configuration (if given) and ingest every supplied report.
pub fn load_session(
    inputs: &ReportInputs,
    config: Option<&Path>,
) -> Result<Session, Box<dyn std::error::Error>> {
    let config = match config {
        Some(path) => VerdictConfig::load(path)?,
        None => VerdictConfig::default(),
    };
    let mut session = Session::with_config(config);

    for (category, path) in inputs.files() {
        let ingested = session.ingest_file(category, path)?;
        for (field, binding) in ingested.schema.bindings() {
            tracing::debug!(report = %category, %field, column = %binding.header, "resolved column");
        }
        eprintln!(
            "{} {} ({} rows, {} columns)",
            "Loaded".green(),
            category.label().white().bold(),
            ingested.source.row_count,
            ingested.source.column_count
        );
    }

    Ok(session)
}

/// Fail unless the three outcome reports were supplied.
pub fn require_ready(session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    if session.is_ready() {
        Ok(())
    } else {
        Err("Upload all three required reports: --ok, --partial and --not-ok".into())
    }
}
