//! Metadata about an ingested report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata about one uploaded report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// Name the report was uploaded under.
    pub name: String,
    /// SHA-256 hash of the raw bytes; stable cache key for derived views.
    pub hash: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Detected encoding.
    pub encoding: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the report was ingested.
    pub ingested_at: DateTime<Utc>,
}

impl SourceMetadata {
    pub fn new(
        name: String,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        Self {
            name,
            hash,
            size_bytes,
            format,
            encoding: "utf-8".to_string(),
            row_count,
            column_count,
            ingested_at: Utc::now(),
        }
    }
}
