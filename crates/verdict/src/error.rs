//! Error types for the verdict library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for verdict operations.
///
/// Only ingestion and export failures surface here. Missing columns, unparseable
/// numeric cells and empty filter results are represented as empty or partial
/// results by the engine, never as errors.
#[derive(Debug, Error)]
pub enum VerdictError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A supplied report could not be read as tabular text.
    #[error("Cannot ingest '{source_name}': {message}")]
    Ingestion {
        source_name: String,
        message: String,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no header row.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Workbook serialization error.
    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// A table does not fit the export format.
    #[error("Export error: {0}")]
    Export(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for verdict operations.
pub type Result<T> = std::result::Result<T, VerdictError>;
