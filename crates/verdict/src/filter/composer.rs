//! Applies a [`FilterSpec`] to a table, producing a new table.

use indexmap::IndexSet;
use serde::Serialize;

use super::spec::{FilterSpec, Membership};
use crate::metrics::{UniqueCount, unique_count};
use crate::schema::{CanonicalField, CanonicalSchema};
use crate::table::{Cell, Table};

/// Return the records of `table` that satisfy every clause of `spec`.
///
/// The source table is left untouched. Clauses over fields this table lacks,
/// including the Dataset ID search, are skipped rather than rejecting rows.
pub fn apply(table: &Table, schema: &CanonicalSchema, spec: &FilterSpec) -> Table {
    if spec.is_empty() {
        return table.clone();
    }

    let needle = spec.search().map(str::to_lowercase);
    let id_index = schema.index(CanonicalField::DatasetId);
    if needle.is_some() && id_index.is_none() {
        tracing::debug!("no Dataset ID column; search clause ignored");
    }

    let clauses: Vec<(usize, &Membership)> = spec
        .clauses()
        .filter(|(_, clause)| !clause.is_unconstrained())
        .filter_map(|(field, clause)| match schema.index(field) {
            Some(index) => Some((index, clause)),
            None => {
                tracing::debug!(%field, "field not in table; filter clause ignored");
                None
            }
        })
        .collect();

    let keep = table.rows().iter().enumerate().filter_map(|(i, row)| {
        let search_ok = match (&needle, id_index) {
            (Some(needle), Some(index)) => contains_ignore_case(Cell::at(row, index), needle),
            _ => true,
        };
        let clauses_ok = clauses
            .iter()
            .all(|(index, clause)| clause.accepts(Cell::at(row, *index)));
        (search_ok && clauses_ok).then_some(i)
    });

    table.select_rows(keep)
}

fn contains_ignore_case(cell: &Cell, needle_lower: &str) -> bool {
    match cell {
        Cell::Absent => false,
        other => other.to_string().to_lowercase().contains(needle_lower),
    }
}

/// Distinct values of a field in first-appearance order, for filter options.
///
/// Empty when the field is missing from the table.
pub fn distinct_values(table: &Table, schema: &CanonicalSchema, field: CanonicalField) -> Vec<String> {
    let Some(index) = schema.index(field) else {
        return Vec::new();
    };
    let values: IndexSet<String> = table.column_values(index).filter_map(Cell::key).collect();
    values.into_iter().collect()
}

/// A filtered table with its record and dataset counts.
#[derive(Debug, Clone, Serialize)]
pub struct FilteredView {
    pub table: Table,
    pub records: usize,
    pub unique_datasets: UniqueCount,
}

impl FilteredView {
    pub fn new(table: &Table, schema: &CanonicalSchema, spec: &FilterSpec) -> Self {
        let table = apply(table, schema, spec);
        let unique_datasets = unique_count(&table, schema);
        Self {
            records: table.row_count(),
            unique_datasets,
            table,
        }
    }
}
