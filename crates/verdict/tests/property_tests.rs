//! Property-based tests for the Verdict engine.
//!
//! Property-based tests verify:
//! 1. **No panics**: coercion and label extraction accept any cell
//! 2. **Idempotence**: applying a filter twice equals applying it once
//! 3. **Identity**: empty filters never reduce the result set
//! 4. **Ordering**: bottom-N output is bounded and non-decreasing
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p verdict --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p verdict --test property_tests
//! ```

use proptest::prelude::*;

use verdict::filter::apply;
use verdict::metrics::{UNKNOWN_CASE, extract_case_label};
use verdict::numeric::coerce;
use verdict::summary::bottom_n;
use verdict::{AliasTable, CanonicalField, CanonicalSchema, Cell, FilterCriteria, FilterSpec, Table};

// =============================================================================
// Test Strategies
// =============================================================================

/// Raw cell text: numbers, placeholders, case-like reasons and noise.
fn raw_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        "-?[0-9]{1,5}(\\.[0-9]{1,3})?",
        Just("N/A".to_string()),
        Just(String::new()),
        "[Cc]ase ?[0-9]{1,4}[a-z ]{0,10}",
        ".{0,20}",
    ]
}

fn any_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        raw_cell().prop_map(|s| Cell::from_raw(&s)),
        any::<f64>().prop_map(Cell::Number),
        Just(Cell::Absent),
    ]
}

/// A report-shaped table with ID, ingest type and data-match columns.
fn report_table() -> impl Strategy<Value = Table> {
    prop::collection::vec(
        (
            prop_oneof!["DS-[0-9]{1,3}", Just(String::new())],
            prop::sample::select(vec!["full", "delta", "", "NA"]),
            raw_cell(),
        ),
        0..40,
    )
    .prop_map(|rows| {
        Table::from_raw(
            ["Dataset ID", "Ingestion type", "% data match"],
            rows.into_iter()
                .map(|(id, kind, pct)| vec![id, kind.to_string(), pct])
                .collect::<Vec<_>>(),
        )
    })
}

fn resolved(table: &Table) -> CanonicalSchema {
    CanonicalSchema::resolve(table, &AliasTable::default())
}

// =============================================================================
// Coercion and labels
// =============================================================================

proptest! {
    #[test]
    fn coerce_is_total_and_finite(cell in any_cell()) {
        if let Some(v) = coerce(&cell) {
            prop_assert!(v.is_finite());
        }
    }

    #[test]
    fn case_label_is_total(cell in any_cell()) {
        let label = extract_case_label(&cell);
        prop_assert!(label == UNKNOWN_CASE || label.starts_with("Case "));
    }

    #[test]
    fn case_label_keeps_digits(n in 0u32..100_000, suffix in "[a-z ]{0,10}") {
        let cell = Cell::from_raw(&format!("Case {}{}", n, suffix));
        prop_assert_eq!(extract_case_label(&cell), format!("Case {}", n));
    }
}

// =============================================================================
// Filters
// =============================================================================

proptest! {
    #[test]
    fn filter_is_idempotent(
        table in report_table(),
        search in "[Dds0-9-]{0,4}",
        kinds in prop::collection::vec(prop::sample::select(vec!["full", "delta"]), 0..3),
    ) {
        let schema = resolved(&table);
        let spec = FilterSpec::build(
            &FilterCriteria::new()
                .with_search(search)
                .with_values(CanonicalField::IngestType, kinds),
        );

        let once = apply(&table, &schema, &spec);
        let twice = apply(&once, &schema, &spec);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn empty_filter_is_identity(table in report_table(), blank in "[ \t]{0,3}") {
        let schema = resolved(&table);
        let spec = FilterSpec::build(
            &FilterCriteria::new()
                .with_search(blank)
                .with_values(CanonicalField::IngestType, Vec::<String>::new()),
        );

        prop_assert_eq!(apply(&table, &schema, &spec), table);
    }

    #[test]
    fn filter_only_removes_rows(table in report_table(), search in "[Dds0-9-]{0,4}") {
        let schema = resolved(&table);
        let spec = FilterSpec::build(&FilterCriteria::new().with_search(search));
        let filtered = apply(&table, &schema, &spec);

        prop_assert!(filtered.row_count() <= table.row_count());
        prop_assert_eq!(filtered.headers(), table.headers());
    }
}

// =============================================================================
// Ranking
// =============================================================================

proptest! {
    #[test]
    fn bottom_n_is_bounded_and_sorted(table in report_table(), n in 0usize..15) {
        let schema = resolved(&table);
        let lowest = bottom_n(&table, &schema, CanonicalField::DataMatchPct, n);

        prop_assert!(lowest.row_count() <= n);
        let values: Vec<f64> = lowest.column_values(2).map(|c| coerce(c).unwrap()).collect();
        prop_assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }
}
