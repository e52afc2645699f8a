//! Verdict: aggregation and filtering engine for dataset-validation reports.
//!
//! A validation pipeline sorts datasets into `OK`, `Partial OK` and `Not OK`
//! reports, optionally with a numeric `Summary`. Verdict ingests those reports,
//! reconciles their inconsistent column names, and derives counts, chart data,
//! filtered views, summary statistics and export bundles from them.
//!
//! # Core Principles
//!
//! - **Schema-tolerant**: columns are found through ordered alias lists; a
//!   missing column disables the feature that needs it, never the whole report
//! - **Non-destructive**: ingested tables are never modified; every view is a
//!   new table
//! - **Deterministic**: every view is a pure function of the ingested bytes
//!
//! # Example
//!
//! ```no_run
//! use verdict::{Category, FilterCriteria, Session};
//!
//! let mut session = Session::new();
//! session.ingest_file(Category::Ok, "ok.csv").unwrap();
//! session.ingest_file(Category::PartialOk, "partial_ok.csv").unwrap();
//! session.ingest_file(Category::NotOk, "not_ok.csv").unwrap();
//!
//! let overview = session.overview();
//! println!("Success rate: {:.1}%", overview.metrics.success_rate);
//!
//! let view = session
//!     .filtered_view(Category::NotOk, &FilterCriteria::new().with_search("DS-1"))
//!     .unwrap();
//! println!("Showing {} records", view.records);
//! ```

pub mod config;
pub mod distribution;
pub mod error;
pub mod export;
pub mod filter;
pub mod input;
pub mod metrics;
pub mod numeric;
pub mod schema;
pub mod summary;
pub mod table;

mod session;

pub use config::VerdictConfig;
pub use distribution::{ChartDataset, ChartPoint, StatusClass, StatusFlagTally};
pub use error::{Result, VerdictError};
pub use export::{ExportBundle, to_delimited_bytes, to_workbook};
pub use filter::{FilterCriteria, FilterSpec, FilteredView, Membership};
pub use input::{Parser, ParserConfig, SourceMetadata};
pub use metrics::{MetricSnapshot, UniqueCount};
pub use schema::{AliasTable, CanonicalField, CanonicalSchema, Category};
pub use session::{COUNT_DIFF_HEADER, IngestedTable, Overview, Session, with_count_diff};
pub use summary::{FieldDescription, Measure, SummaryReport};
pub use table::{Cell, Table};
