//! Unique-dataset counts and headline metrics.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::schema::{CanonicalField, CanonicalSchema};
use crate::table::Table;

/// How many datasets a table describes.
///
/// When the table has no Dataset ID column the engine falls back to the row
/// count, and says so.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum UniqueCount {
    /// Number of distinct non-empty Dataset IDs.
    Distinct(usize),
    /// Row count, used because the Dataset ID column is missing.
    RowCount(usize),
}

impl UniqueCount {
    pub fn value(&self) -> usize {
        match self {
            UniqueCount::Distinct(n) | UniqueCount::RowCount(n) => *n,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, UniqueCount::RowCount(_))
    }
}

/// Count distinct Dataset IDs in a table.
pub fn unique_count(table: &Table, schema: &CanonicalSchema) -> UniqueCount {
    match schema.index(CanonicalField::DatasetId) {
        Some(index) => {
            let ids: HashSet<String> = table.column_values(index).filter_map(|c| c.key()).collect();
            UniqueCount::Distinct(ids.len())
        }
        None => {
            tracing::warn!(
                rows = table.row_count(),
                "no Dataset ID column; counting rows instead"
            );
            UniqueCount::RowCount(table.row_count())
        }
    }
}

/// Percentage of OK datasets among all outcomes, 0 when there are none.
pub fn success_rate(ok: usize, partial_ok: usize, not_ok: usize) -> f64 {
    let total = ok + partial_ok + not_ok;
    if total == 0 {
        0.0
    } else {
        ok as f64 / total as f64 * 100.0
    }
}

/// Headline numbers for the three outcome reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    pub ok: usize,
    pub partial_ok: usize,
    pub not_ok: usize,
    pub total: usize,
    /// OK share of the total, in percent.
    pub success_rate: f64,
}

impl MetricSnapshot {
    pub fn from_counts(ok: usize, partial_ok: usize, not_ok: usize) -> Self {
        Self {
            ok,
            partial_ok,
            not_ok,
            total: ok + partial_ok + not_ok,
            success_rate: success_rate(ok, partial_ok, not_ok),
        }
    }
}
