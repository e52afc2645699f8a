//! Descriptive statistics over numeric columns.

use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::numeric;
use crate::schema::{CanonicalField, CanonicalSchema};
use crate::table::Table;

/// A statistic that may be unavailable (no numeric values to compute from).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure {
    Value(f64),
    NotAvailable,
}

impl Measure {
    pub fn value(&self) -> Option<f64> {
        match self {
            Measure::Value(v) => Some(*v),
            Measure::NotAvailable => None,
        }
    }

    /// Format as a one-decimal percentage, or `N/A`.
    pub fn as_percent(&self) -> String {
        match self {
            Measure::Value(v) => format!("{:.1}%", v),
            Measure::NotAvailable => "N/A".to_string(),
        }
    }
}

impl From<Option<f64>> for Measure {
    fn from(value: Option<f64>) -> Self {
        value.map(Measure::Value).unwrap_or(Measure::NotAvailable)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Value(v) => write!(f, "{}", v),
            Measure::NotAvailable => f.write_str("N/A"),
        }
    }
}

impl Serialize for Measure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Measure::Value(v) => serializer.serialize_f64(*v),
            Measure::NotAvailable => serializer.serialize_str("N/A"),
        }
    }
}

/// Summary statistics for one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescription {
    /// The raw header the statistics were computed from.
    pub header: String,
    /// Number of numeric cells.
    pub count: usize,
    pub mean: Measure,
    /// Sample standard deviation; needs at least two values.
    pub std: Measure,
    pub min: Measure,
    /// First quartile (25th percentile).
    pub q1: Measure,
    pub median: Measure,
    /// Third quartile (75th percentile).
    pub q3: Measure,
    pub max: Measure,
}

impl FieldDescription {
    /// Describe a set of values. Non-finite values must already be removed.
    pub fn from_values(header: impl Into<String>, mut values: Vec<f64>) -> Self {
        values.sort_by(f64::total_cmp);
        let count = values.len();

        let mean = (count > 0).then(|| values.iter().sum::<f64>() / count as f64);
        let std = mean.filter(|_| count > 1).map(|m| {
            let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        });

        Self {
            header: header.into(),
            count,
            mean: mean.into(),
            std: std.into(),
            min: values.first().copied().into(),
            q1: quantile(&values, 0.25).into(),
            median: quantile(&values, 0.5).into(),
            q3: quantile(&values, 0.75).into(),
            max: values.last().copied().into(),
        }
    }
}

/// Linear-interpolated quantile of sorted values.
fn quantile(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64))
}

/// Numeric values of a bound field, non-numeric cells dropped.
pub(crate) fn numeric_values(
    table: &Table,
    schema: &CanonicalSchema,
    field: CanonicalField,
) -> Option<Vec<f64>> {
    let index = schema.index(field)?;
    Some(table.column_values(index).filter_map(numeric::coerce).collect())
}

/// Describe each requested field present in the table.
///
/// Fields the table lacks are left out of the result.
pub fn describe_numeric(
    table: &Table,
    schema: &CanonicalSchema,
    fields: &[CanonicalField],
) -> IndexMap<CanonicalField, FieldDescription> {
    fields
        .iter()
        .filter_map(|&field| {
            let header = schema.column(field)?;
            let values = numeric_values(table, schema, field)?;
            Some((field, FieldDescription::from_values(header, values)))
        })
        .collect()
}
