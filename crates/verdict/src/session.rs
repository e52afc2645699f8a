//! The per-invocation session holding the uploaded reports.

use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::VerdictConfig;
use crate::distribution::{
    CategoryTable, ChartDataset, StatusFlagTally, case_distribution, category_distribution,
    ingest_type_distribution, max_date_distribution,
};
use crate::error::Result;
use crate::export::ExportBundle;
use crate::filter::{FilterCriteria, FilterSpec, FilteredView, distinct_values};
use crate::input::{Parser, SourceMetadata};
use crate::metrics::{MetricSnapshot, NOT_AVAILABLE, first_non_empty_date, unique_count};
use crate::schema::{CanonicalField, CanonicalSchema, Category};
use crate::summary::SummaryReport;
use crate::table::{Cell, Table};

/// Header of the derived old-minus-new column on the Not OK report.
pub const COUNT_DIFF_HEADER: &str = "Count Diff";

/// An uploaded report with its resolved schema and source metadata.
#[derive(Debug, Clone, Serialize)]
pub struct IngestedTable {
    pub table: Table,
    pub schema: CanonicalSchema,
    pub source: SourceMetadata,
}

/// Everything the overview page shows.
#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub metrics: MetricSnapshot,
    /// Sanity run date, or `"N/A"`.
    pub run_date: String,
    pub category_split: ChartDataset,
    pub case_distribution: ChartDataset,
    pub ingest_types: ChartDataset,
    pub status_flags: StatusFlagTally,
    pub max_dates: ChartDataset,
}

/// Holds up to one report per [`Category`] and derives every view from them.
///
/// Nothing is cached; each view is recomputed from the ingested tables.
pub struct Session {
    config: VerdictConfig,
    parser: Parser,
    tables: IndexMap<Category, IngestedTable>,
}

impl Session {
    /// Create an empty session with default configuration.
    pub fn new() -> Self {
        Self::with_config(VerdictConfig::default())
    }

    /// Create an empty session with custom configuration.
    pub fn with_config(config: VerdictConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        Self {
            config,
            parser,
            tables: IndexMap::new(),
        }
    }

    pub fn config(&self) -> &VerdictConfig {
        &self.config
    }

    /// Parse and store the report for `category`, replacing any earlier one.
    ///
    /// On error the session is left unchanged.
    pub fn ingest(&mut self, category: Category, name: &str, bytes: &[u8]) -> Result<&IngestedTable> {
        let (table, source) = self.parser.parse_named(name, bytes)?;
        Ok(self.store(category, table, source))
    }

    /// Like [`Session::ingest`], reading the report from disk.
    pub fn ingest_file(&mut self, category: Category, path: impl AsRef<Path>) -> Result<&IngestedTable> {
        let (table, source) = self.parser.parse_file(path)?;
        Ok(self.store(category, table, source))
    }

    fn store(&mut self, category: Category, table: Table, source: SourceMetadata) -> &IngestedTable {
        let schema = CanonicalSchema::resolve(&table, &self.config.aliases);
        let missing = schema.missing();
        if !missing.is_empty() {
            tracing::debug!(
                category = %category,
                missing = ?missing.iter().map(|f| f.name()).collect::<Vec<_>>(),
                "report lacks some canonical fields"
            );
        }
        let (index, _) = self.tables.insert_full(
            category,
            IngestedTable {
                table,
                schema,
                source,
            },
        );
        &self.tables[index]
    }

    pub fn table(&self, category: Category) -> Option<&IngestedTable> {
        self.tables.get(&category)
    }

    /// Whether all three outcome reports have been ingested.
    pub fn is_ready(&self) -> bool {
        Category::OUTCOMES.iter().all(|c| self.tables.contains_key(c))
    }

    /// Ingested reports among `categories`, in the order given.
    fn category_tables(&self, categories: &[Category]) -> Vec<CategoryTable<'_>> {
        categories
            .iter()
            .filter_map(|&category| {
                self.tables
                    .get(&category)
                    .map(|t| CategoryTable::new(category, &t.table, &t.schema))
            })
            .collect()
    }

    fn dataset_count(&self, category: Category) -> usize {
        self.tables
            .get(&category)
            .map(|t| unique_count(&t.table, &t.schema).value())
            .unwrap_or(0)
    }

    /// Unique-dataset counts and success rate over the outcome reports.
    pub fn metrics(&self) -> MetricSnapshot {
        MetricSnapshot::from_counts(
            self.dataset_count(Category::Ok),
            self.dataset_count(Category::PartialOk),
            self.dataset_count(Category::NotOk),
        )
    }

    /// Sanity run date from the OK report, falling back to Not OK.
    pub fn sanity_run_date(&self) -> String {
        [Category::Ok, Category::NotOk]
            .iter()
            .filter_map(|c| self.tables.get(c))
            .map(|t| first_non_empty_date(&t.table, &t.schema))
            .find(|date| date != NOT_AVAILABLE)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn overview(&self) -> Overview {
        let outcomes = self.category_tables(&Category::OUTCOMES);
        let flagged = self.category_tables(&[Category::PartialOk, Category::NotOk]);
        let metrics = self.metrics();

        Overview {
            metrics,
            run_date: self.sanity_run_date(),
            category_split: category_distribution(&metrics),
            case_distribution: case_distribution(&outcomes),
            ingest_types: ingest_type_distribution(&outcomes),
            status_flags: StatusFlagTally::from_tables(&flagged, CanonicalField::DatasetId),
            max_dates: max_date_distribution(&flagged),
        }
    }

    /// Distinct values of `field` in one report, for filter options.
    pub fn filter_options(&self, category: Category, field: CanonicalField) -> Vec<String> {
        self.tables
            .get(&category)
            .map(|t| distinct_values(&t.table, &t.schema, field))
            .unwrap_or_default()
    }

    /// Apply `criteria` to one report. `None` when it was never ingested.
    ///
    /// The Not OK view carries the derived [`COUNT_DIFF_HEADER`] column.
    pub fn filtered_view(&self, category: Category, criteria: &FilterCriteria) -> Option<FilteredView> {
        let ingested = self.tables.get(&category)?;
        let spec = FilterSpec::build(criteria);

        if category == Category::NotOk {
            let derived = with_count_diff(&ingested.table, &ingested.schema);
            Some(FilteredView::new(&derived, &ingested.schema, &spec))
        } else {
            Some(FilteredView::new(&ingested.table, &ingested.schema, &spec))
        }
    }

    /// Numeric analysis of the Summary report, if one was ingested.
    pub fn summary_report(&self) -> Option<SummaryReport> {
        let summary = self.tables.get(&Category::Summary)?;
        Some(SummaryReport::build(
            &summary.table,
            &summary.schema,
            self.config.histogram_buckets,
            self.config.bottom_n,
        ))
    }

    /// All ingested reports, one sheet each.
    pub fn export_bundle(&self) -> ExportBundle<'_> {
        [
            ("OK Datasets", Category::Ok),
            ("Partial OK", Category::PartialOk),
            ("Not OK", Category::NotOk),
            ("Summary", Category::Summary),
        ]
        .into_iter()
        .fold(
            ExportBundle::with_name_limit(self.config.sheet_name_limit),
            |bundle, (name, category)| bundle.with_sheet(name, self.tables.get(&category).map(|t| &t.table)),
        )
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Append `old count − new count` as [`COUNT_DIFF_HEADER`].
///
/// Rows where either side is not numeric get an absent cell. The table is
/// returned unchanged when either count column is missing.
pub fn with_count_diff(table: &Table, schema: &CanonicalSchema) -> Table {
    let (Some(old), Some(new)) = (
        schema.index(CanonicalField::OldCount),
        schema.index(CanonicalField::NewCount),
    ) else {
        tracing::debug!("count columns missing; no Count Diff");
        return table.clone();
    };

    let diffs = table
        .rows()
        .iter()
        .map(|row| {
            match (Cell::at(row, old).as_number(), Cell::at(row, new).as_number()) {
                (Some(a), Some(b)) => Cell::Number(a - b),
                _ => Cell::Absent,
            }
        })
        .collect();

    table.with_column(COUNT_DIFF_HEADER, diffs)
}
