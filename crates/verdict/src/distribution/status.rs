//! Status-flag classification into Matching / Unmatching.

use serde::{Deserialize, Serialize};

use super::crosstab::{CategoryTable, distinct_ids_by_key};
use super::dataset::{ChartDataset, ChartPoint};
use crate::schema::CanonicalField;

/// Bucket a status flag falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusClass {
    Matching,
    Unmatching,
}

impl StatusClass {
    pub fn label(&self) -> &'static str {
        match self {
            StatusClass::Matching => "Matching",
            StatusClass::Unmatching => "Unmatching",
        }
    }
}

/// Classify a raw status-flag value.
///
/// Values mentioning "match" are `Unmatching` if they also contain "un" or
/// "not", otherwise `Matching`. Anything without "match" is `None` and is left
/// out of both buckets.
pub fn classify_status_flag(raw: &str) -> Option<StatusClass> {
    let value = raw.trim().to_lowercase();
    if !value.contains("match") {
        return None;
    }
    if value.contains("un") || value.contains("not") {
        Some(StatusClass::Unmatching)
    } else {
        Some(StatusClass::Matching)
    }
}

/// Distinct-dataset totals per status class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusFlagTally {
    pub matching: usize,
    pub unmatching: usize,
}

impl StatusFlagTally {
    /// Tally status flags over several tables.
    ///
    /// Each table is grouped by raw flag value; the distinct-ID count of each
    /// group is added to the bucket its value classifies into.
    pub fn from_tables(tables: &[CategoryTable<'_>], id: CanonicalField) -> Self {
        tables.iter().fold(Self::default(), |tally, entry| {
            let Some(flag_index) = entry.schema.index(CanonicalField::StatusFlag) else {
                tracing::debug!(category = %entry.category, "no status flag column");
                return tally;
            };
            distinct_ids_by_key(entry.table, flag_index, entry.schema.index(id))
                .into_iter()
                .fold(tally, |tally, (value, count)| tally.add(classify_status_flag(&value), count))
        })
    }

    fn add(self, class: Option<StatusClass>, count: usize) -> Self {
        match class {
            Some(StatusClass::Matching) => Self {
                matching: self.matching + count,
                ..self
            },
            Some(StatusClass::Unmatching) => Self {
                unmatching: self.unmatching + count,
                ..self
            },
            None => self,
        }
    }

    pub fn total(&self) -> usize {
        self.matching + self.unmatching
    }

    /// Whether the status-flag chart has anything to show.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Pie-chart dataset; empty when nothing was classified.
    pub fn to_dataset(&self) -> ChartDataset {
        if self.is_empty() {
            return ChartDataset::default();
        }
        ChartDataset::new(vec![
            ChartPoint::single(StatusClass::Matching.label(), self.matching),
            ChartPoint::single(StatusClass::Unmatching.label(), self.unmatching),
        ])
    }
}
