//! Case-number distribution over sanity reasons.

use std::collections::HashMap;

use super::crosstab::CategoryTable;
use super::dataset::{ChartDataset, ChartPoint};
use crate::metrics::{UNKNOWN_CASE, compare_case_labels, extract_case_label};
use crate::schema::CanonicalField;
use crate::table::Cell;

/// Count records per extracted case label across all tables.
///
/// Records from tables without a sanity-reason column count as `"Unknown"`.
/// The result is empty when no table has the column. Labels are ordered by
/// case number, with `"Unknown"` placed by plain string comparison.
pub fn case_distribution(tables: &[CategoryTable<'_>]) -> ChartDataset {
    if !tables
        .iter()
        .any(|t| t.schema.has(CanonicalField::SanityReason))
    {
        tracing::debug!("no sanity reason column in any table");
        return ChartDataset::default();
    }

    let counts = tables.iter().fold(HashMap::new(), |mut counts, entry| {
        let index = entry.schema.index(CanonicalField::SanityReason);
        for row in entry.table.rows() {
            let label = match index {
                Some(i) => extract_case_label(Cell::at(row, i)),
                None => UNKNOWN_CASE.to_string(),
            };
            *counts.entry(label).or_insert(0usize) += 1;
        }
        counts
    });

    let mut labels: Vec<(String, usize)> = counts.into_iter().collect();
    labels.sort_by(|(a, _), (b, _)| compare_case_labels(a, b));
    labels
        .into_iter()
        .map(|(label, count)| ChartPoint::single(label, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AliasTable, CanonicalSchema, Category};
    use crate::table::Table;

    #[test]
    fn test_case_distribution_orders_and_counts() {
        let ok = Table::from_raw(
            ["Dataset ID", "Sanity reason"],
            vec![
                vec!["DS-1", "Case 10: count drift"],
                vec!["DS-2", "case 2"],
                vec!["DS-3", ""],
            ],
        );
        let partial = Table::from_raw(
            ["Dataset ID", "sanity_reason"],
            vec![vec!["DS-4", "Case 2 again"], vec!["DS-5", "unclear"]],
        );
        let no_reason = Table::from_raw(["Dataset ID"], vec![vec!["DS-6"]]);

        let aliases = AliasTable::default();
        let (s1, s2, s3) = (
            CanonicalSchema::resolve(&ok, &aliases),
            CanonicalSchema::resolve(&partial, &aliases),
            CanonicalSchema::resolve(&no_reason, &aliases),
        );
        let dataset = case_distribution(&[
            CategoryTable::new(Category::Ok, &ok, &s1),
            CategoryTable::new(Category::PartialOk, &partial, &s2),
            CategoryTable::new(Category::NotOk, &no_reason, &s3),
        ]);

        assert_eq!(dataset.dimensions(), vec!["Case 2", "Case 10", "Unknown"]);
        assert_eq!(dataset.count("Case 2", "Case 2"), Some(2));
        assert_eq!(dataset.count("Unknown", "Unknown"), Some(3));
        assert_eq!(dataset.total(), 6);
    }

    #[test]
    fn test_case_distribution_unavailable_without_column() {
        let table = Table::from_raw(["Dataset ID"], vec![vec!["DS-1"]]);
        let schema = CanonicalSchema::resolve(&table, &AliasTable::default());
        assert!(case_distribution(&[CategoryTable::new(Category::Ok, &table, &schema)]).is_empty());
    }
}
