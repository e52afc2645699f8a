//! Category × dimension cross-tabulation.

use std::collections::HashSet;

use indexmap::IndexMap;

use super::dataset::{ChartDataset, ChartPoint};
use crate::metrics::MetricSnapshot;
use crate::schema::{CanonicalField, CanonicalSchema, Category};
use crate::table::{Cell, Table};

/// A resolved table tagged with the report it came from.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTable<'a> {
    pub category: Category,
    pub table: &'a Table,
    pub schema: &'a CanonicalSchema,
}

impl<'a> CategoryTable<'a> {
    pub fn new(category: Category, table: &'a Table, schema: &'a CanonicalSchema) -> Self {
        Self {
            category,
            table,
            schema,
        }
    }
}

/// Count distinct IDs per distinct value of the `key` column.
///
/// Keys keep first-appearance order; absent keys are dropped. Without an ID
/// column, rows are counted instead.
pub(crate) fn distinct_ids_by_key(
    table: &Table,
    key_index: usize,
    id_index: Option<usize>,
) -> IndexMap<String, usize> {
    let mut groups: IndexMap<String, (HashSet<String>, usize)> = IndexMap::new();

    for row in table.rows() {
        let Some(key) = Cell::at(row, key_index).key() else {
            continue;
        };
        let (ids, rows) = groups.entry(key).or_default();
        *rows += 1;
        if let Some(id) = id_index.and_then(|i| Cell::at(row, i).key()) {
            ids.insert(id);
        }
    }

    groups
        .into_iter()
        .map(|(key, (ids, rows))| {
            let count = if id_index.is_some() { ids.len() } else { rows };
            (key, count)
        })
        .collect()
}

/// Cross-tabulate `dimension` against category, counting distinct `id`s.
///
/// Points come out category by category in input order, then by first
/// appearance of each dimension value. Tables lacking the dimension field
/// contribute nothing.
pub fn cross_tabulate(
    tables: &[CategoryTable<'_>],
    dimension: CanonicalField,
    id: CanonicalField,
) -> ChartDataset {
    tables
        .iter()
        .flat_map(|entry| {
            let groups = match entry.schema.index(dimension) {
                Some(dim_index) => {
                    distinct_ids_by_key(entry.table, dim_index, entry.schema.index(id))
                }
                None => {
                    tracing::debug!(
                        category = %entry.category,
                        field = %dimension,
                        "dimension missing; category skipped"
                    );
                    IndexMap::new()
                }
            };
            groups
                .into_iter()
                .map(move |(value, count)| ChartPoint::new(entry.category.label(), value, count))
        })
        .collect()
}

/// Datasets per ingest type across the outcome reports.
pub fn ingest_type_distribution(tables: &[CategoryTable<'_>]) -> ChartDataset {
    cross_tabulate(tables, CanonicalField::IngestType, CanonicalField::DatasetId)
}

/// Datasets per max-date status across the outcome reports.
pub fn max_date_distribution(tables: &[CategoryTable<'_>]) -> ChartDataset {
    cross_tabulate(tables, CanonicalField::MaxDateStatus, CanonicalField::DatasetId)
}

/// OK / Partial OK / Not OK split.
pub fn category_distribution(snapshot: &MetricSnapshot) -> ChartDataset {
    ChartDataset::new(vec![
        ChartPoint::single(Category::Ok.label(), snapshot.ok),
        ChartPoint::single(Category::PartialOk.label(), snapshot.partial_ok),
        ChartPoint::single(Category::NotOk.label(), snapshot.not_ok),
    ])
}
