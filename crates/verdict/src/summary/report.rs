//! The combined view of the Not OK summary report.

use indexmap::IndexMap;
use serde::Serialize;

use super::describe::{FieldDescription, describe_numeric};
use super::histogram::{HistogramBucket, histogram_buckets};
use super::ranking::{PairedPoint, bottom_n, paired_series};
use crate::schema::{CanonicalField, CanonicalSchema};
use crate::table::Table;

/// Statistics, histogram, scatter and lowest-match table for one summary report.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    /// Descriptive statistics for each percentage column present.
    pub statistics: IndexMap<CanonicalField, FieldDescription>,
    /// Distribution of `% data match`.
    pub data_match_histogram: Vec<HistogramBucket>,
    /// `% date match` against `% data match`.
    pub match_scatter: Vec<PairedPoint>,
    /// Rows with the lowest `% data match`.
    pub lowest_data_match: Table,
}

impl SummaryReport {
    pub fn build(
        table: &Table,
        schema: &CanonicalSchema,
        histogram_buckets_count: usize,
        lowest_n: usize,
    ) -> Self {
        Self {
            statistics: describe_numeric(table, schema, &CanonicalField::PERCENTAGES),
            data_match_histogram: histogram_buckets(
                table,
                schema,
                CanonicalField::DataMatchPct,
                histogram_buckets_count,
            ),
            match_scatter: paired_series(
                table,
                schema,
                CanonicalField::DateMatchPct,
                CanonicalField::DataMatchPct,
            ),
            lowest_data_match: bottom_n(table, schema, CanonicalField::DataMatchPct, lowest_n),
        }
    }
}
