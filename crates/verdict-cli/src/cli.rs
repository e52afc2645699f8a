//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use verdict::{CanonicalField, Category, FilterCriteria};

/// Verdict: aggregate, filter and export dataset-validation reports
#[derive(Parser)]
#[command(name = "verdict")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON configuration file (aliases, parser, export settings)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// The report files to load. Every command takes the same set.
#[derive(Args, Debug, Clone)]
pub struct ReportInputs {
    /// OK datasets report
    #[arg(long, value_name = "FILE")]
    pub ok: Option<PathBuf>,

    /// Partial OK datasets report
    #[arg(long, value_name = "FILE")]
    pub partial: Option<PathBuf>,

    /// Not OK datasets report
    #[arg(long, value_name = "FILE")]
    pub not_ok: Option<PathBuf>,

    /// Not OK summary report (percentages)
    #[arg(long, value_name = "FILE")]
    pub summary: Option<PathBuf>,
}

impl ReportInputs {
    /// Supplied files, keyed by the report they hold.
    pub fn files(&self) -> Vec<(Category, &PathBuf)> {
        [
            (Category::Ok, &self.ok),
            (Category::PartialOk, &self.partial),
            (Category::NotOk, &self.not_ok),
            (Category::Summary, &self.summary),
        ]
        .into_iter()
        .filter_map(|(category, path)| path.as_ref().map(|p| (category, p)))
        .collect()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show headline metrics and chart data for the outcome reports
    Overview {
        #[command(flatten)]
        inputs: ReportInputs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Filter one report and write the matching records as CSV
    Filter {
        /// Report to filter (ok, partial, not-ok, summary)
        #[arg(value_name = "REPORT")]
        report: Category,

        #[command(flatten)]
        inputs: ReportInputs,

        #[command(flatten)]
        selection: FilterArgs,

        /// Output path (default: the report's standard file name)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// List the available values for each filter instead of filtering
        #[arg(long)]
        options: bool,
    },

    /// Analyze the percentage columns of the Not OK summary
    Summary {
        #[command(flatten)]
        inputs: ReportInputs,

        /// Histogram bucket count (default from config)
        #[arg(long)]
        bins: Option<usize>,

        /// Rows in the lowest data-match table (default from config)
        #[arg(long)]
        bottom: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write every loaded report to a dated XLSX workbook
    Export {
        #[command(flatten)]
        inputs: ReportInputs,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Report date for the file name (default: today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<chrono::NaiveDate>,
    },
}

/// Search and multi-value selections for the `filter` command.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive substring of the Dataset ID
    #[arg(short, long)]
    pub search: Option<String>,

    /// Keep only these ingest types (repeatable)
    #[arg(long, value_name = "VALUE")]
    pub ingest_type: Vec<String>,

    /// Keep only these statuses (repeatable)
    #[arg(long, value_name = "VALUE")]
    pub status: Vec<String>,

    /// Keep only these status flags (repeatable)
    #[arg(long, value_name = "VALUE")]
    pub status_flag: Vec<String>,

    /// Keep only these max-date statuses (repeatable)
    #[arg(long, value_name = "VALUE")]
    pub max_date: Vec<String>,

    /// Keep only these sanity reasons (repeatable)
    #[arg(long, value_name = "VALUE")]
    pub sanity_reason: Vec<String>,
}

impl FilterArgs {
    /// Fields the filter command exposes, in display order.
    pub const FIELDS: [CanonicalField; 5] = [
        CanonicalField::IngestType,
        CanonicalField::Status,
        CanonicalField::StatusFlag,
        CanonicalField::MaxDateStatus,
        CanonicalField::SanityReason,
    ];

    pub fn to_criteria(&self) -> FilterCriteria {
        let selections = [
            &self.ingest_type,
            &self.status,
            &self.status_flag,
            &self.max_date,
            &self.sanity_reason,
        ];

        let criteria = match &self.search {
            Some(term) => FilterCriteria::new().with_search(term.clone()),
            None => FilterCriteria::new(),
        };
        Self::FIELDS
            .into_iter()
            .zip(selections)
            .filter(|(_, values)| !values.is_empty())
            .fold(criteria, |criteria, (field, values)| {
                criteria.with_values(field, values.iter().cloned())
            })
    }
}
