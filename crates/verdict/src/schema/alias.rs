//! Ordered header spellings accepted for each canonical field.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::types::CanonicalField;

/// Maps each [`CanonicalField`] to the raw headers that may carry it, in
/// priority order.
///
/// Deserializing a partial table keeps the built-in spellings for every field
/// the input does not mention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "IndexMap<CanonicalField, Vec<String>>",
    into = "IndexMap<CanonicalField, Vec<String>>"
)]
pub struct AliasTable {
    entries: IndexMap<CanonicalField, Vec<String>>,
}

impl AliasTable {
    /// Table with no spellings at all; every field resolves as absent.
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Replace the spellings for one field.
    pub fn with_aliases<S: Into<String>>(
        mut self,
        field: CanonicalField,
        aliases: impl IntoIterator<Item = S>,
    ) -> Self {
        self.entries
            .insert(field, aliases.into_iter().map(Into::into).collect());
        self
    }

    /// Accepted spellings for a field, highest priority first.
    pub fn aliases(&self, field: CanonicalField) -> &[String] {
        self.entries.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = CanonicalField> + '_ {
        self.entries.keys().copied()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        use CanonicalField::*;

        let spellings: [(CanonicalField, &[&str]); 13] = [
            (DatasetId, &["Dataset ID", "dataset_id", "Dataset Id"]),
            (IngestType, &["Ingestion type", "Ingest type", "ingest_type"]),
            (Status, &["Status", "status"]),
            (StatusFlag, &["Status flag", "status_flag", "Status Flag"]),
            (
                SanityReason,
                &["Sanity reason", "sanity reason", "sanity_reason", "Sanity Reason"],
            ),
            (
                MaxDateStatus,
                &["Max date not matching", "max_date_matching", "Max Date"],
            ),
            (
                SanityRunDate,
                &["sanity run date", "sanity_run_date", "Sanity run date"],
            ),
            (OldCount, &["old count", "old_count", "Old count"]),
            (NewCount, &["new count", "new_count", "New count"]),
            (DateMatchPct, &["% date match", "date_match_pct", "% Date Match"]),
            (
                DateUnmatchPct,
                &["% date unmatch", "date_unmatch_pct", "% Date Unmatch"],
            ),
            (DataMatchPct, &["% data match", "data_match_pct", "% Data Match"]),
            (
                DataUnmatchPct,
                &["% data unmatch", "data_unmatch_pct", "% Data Unmatch"],
            ),
        ];

        let entries = spellings
            .into_iter()
            .map(|(field, names)| (field, names.iter().map(|s| s.to_string()).collect()))
            .collect();
        Self { entries }
    }
}

impl From<IndexMap<CanonicalField, Vec<String>>> for AliasTable {
    fn from(overrides: IndexMap<CanonicalField, Vec<String>>) -> Self {
        let mut table = AliasTable::default();
        for (field, aliases) in overrides {
            table.entries.insert(field, aliases);
        }
        table
    }
}

impl From<AliasTable> for IndexMap<CanonicalField, Vec<String>> {
    fn from(table: AliasTable) -> Self {
        table.entries
    }
}
