//! Paired-metric scatter data and lowest-N ranking.

use serde::Serialize;

use crate::numeric;
use crate::schema::{CanonicalField, CanonicalSchema};
use crate::table::{Cell, Table};

/// One scatter point with the Dataset ID it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairedPoint {
    pub x: f64,
    pub y: f64,
    pub record_id: Option<String>,
}

/// Points for rows where both `x` and `y` parse as numbers.
pub fn paired_series(
    table: &Table,
    schema: &CanonicalSchema,
    x: CanonicalField,
    y: CanonicalField,
) -> Vec<PairedPoint> {
    let (Some(xi), Some(yi)) = (schema.index(x), schema.index(y)) else {
        return Vec::new();
    };
    let id_index = schema.index(CanonicalField::DatasetId);

    table
        .rows()
        .iter()
        .filter_map(|row| {
            Some(PairedPoint {
                x: numeric::coerce(Cell::at(row, xi))?,
                y: numeric::coerce(Cell::at(row, yi))?,
                record_id: id_index.and_then(|i| Cell::at(row, i).key()),
            })
        })
        .collect()
}

/// The `n` rows with the smallest numeric `field`, ascending.
///
/// Non-numeric rows are dropped first; ties keep their original row order.
pub fn bottom_n(table: &Table, schema: &CanonicalSchema, field: CanonicalField, n: usize) -> Table {
    let Some(index) = schema.index(field) else {
        return table.with_rows(Vec::new());
    };

    let mut ranked: Vec<(usize, f64)> = table
        .column_values(index)
        .enumerate()
        .filter_map(|(row, cell)| numeric::coerce(cell).map(|v| (row, v)))
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked.truncate(n);

    table.select_rows(ranked.into_iter().map(|(row, _)| row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::AliasTable;

    fn summary() -> (Table, CanonicalSchema) {
        let table = Table::from_raw(
            ["Dataset ID", "% date match", "% data match"],
            vec![
                vec!["DS-1", "90", "40"],
                vec!["DS-2", "", "10"],
                vec!["DS-3", "80", "40"],
                vec!["DS-4", "70", "5"],
                vec!["Total", "80", "avg"],
            ],
        );
        let schema = CanonicalSchema::resolve(&table, &AliasTable::default());
        (table, schema)
    }

    fn ids(table: &Table) -> Vec<String> {
        table.column_values(0).map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_paired_series_requires_both_values() {
        let (table, schema) = summary();
        let points = paired_series(
            &table,
            &schema,
            CanonicalField::DateMatchPct,
            CanonicalField::DataMatchPct,
        );

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].record_id.as_deref(), Some("DS-1"));
        assert_eq!((points[2].x, points[2].y), (70.0, 5.0));
    }

    #[test]
    fn test_bottom_n_is_stable_and_sorted() {
        let (table, schema) = summary();
        let lowest = bottom_n(&table, &schema, CanonicalField::DataMatchPct, 10);
        assert_eq!(ids(&lowest), vec!["DS-4", "DS-2", "DS-1", "DS-3"]);
    }

    #[test]
    fn test_bottom_n_truncates() {
        let (table, schema) = summary();
        let lowest = bottom_n(&table, &schema, CanonicalField::DataMatchPct, 2);
        assert_eq!(ids(&lowest), vec!["DS-4", "DS-2"]);
        assert_eq!(lowest.headers(), table.headers());
    }

    #[test]
    fn test_bottom_n_missing_field_is_empty() {
        let (table, schema) = summary();
        assert!(bottom_n(&table, &schema, CanonicalField::OldCount, 5).is_empty());
    }
}
