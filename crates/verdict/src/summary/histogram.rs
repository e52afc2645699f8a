//! Equal-width histogram buckets.

use serde::Serialize;

use super::describe::numeric_values;
use crate::schema::{CanonicalField, CanonicalSchema};
use crate::table::Table;

/// One histogram bar covering `[low, high)`; the last bucket also includes
/// `high`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBucket {
    pub low: f64,
    pub high: f64,
    pub count: usize,
}

/// Bucket the numeric values of `field` into `bucket_count` equal-width bins.
///
/// Rows that do not parse as numbers (e.g. a trailing total row) are left out.
/// Returns no buckets when the field is missing, nothing is numeric, or
/// `bucket_count` is zero; a single bucket when every value is equal.
pub fn histogram_buckets(
    table: &Table,
    schema: &CanonicalSchema,
    field: CanonicalField,
    bucket_count: usize,
) -> Vec<HistogramBucket> {
    let values = numeric_values(table, schema, field).unwrap_or_default();
    bucket_values(&values, bucket_count)
}

fn bucket_values(values: &[f64], bucket_count: usize) -> Vec<HistogramBucket> {
    if values.is_empty() || bucket_count == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return vec![HistogramBucket {
            low: min,
            high: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / bucket_count as f64;
    let mut counts = vec![0usize; bucket_count];
    for &v in values {
        let slot = (((v - min) / width).floor() as usize).min(bucket_count - 1);
        counts[slot] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBucket {
            low: min + width * i as f64,
            high: if i + 1 == bucket_count {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count,
        })
        .collect()
}
