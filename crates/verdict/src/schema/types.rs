//! Canonical field names and report categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable internal name standing in for the column spellings a report may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalField {
    DatasetId,
    IngestType,
    Status,
    StatusFlag,
    SanityReason,
    MaxDateStatus,
    SanityRunDate,
    OldCount,
    NewCount,
    DateMatchPct,
    DateUnmatchPct,
    DataMatchPct,
    DataUnmatchPct,
}

impl CanonicalField {
    /// Every field, in declaration order.
    pub const ALL: [CanonicalField; 13] = [
        CanonicalField::DatasetId,
        CanonicalField::IngestType,
        CanonicalField::Status,
        CanonicalField::StatusFlag,
        CanonicalField::SanityReason,
        CanonicalField::MaxDateStatus,
        CanonicalField::SanityRunDate,
        CanonicalField::OldCount,
        CanonicalField::NewCount,
        CanonicalField::DateMatchPct,
        CanonicalField::DateUnmatchPct,
        CanonicalField::DataMatchPct,
        CanonicalField::DataUnmatchPct,
    ];

    /// The percentage columns of the summary report.
    pub const PERCENTAGES: [CanonicalField; 4] = [
        CanonicalField::DateMatchPct,
        CanonicalField::DateUnmatchPct,
        CanonicalField::DataMatchPct,
        CanonicalField::DataUnmatchPct,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CanonicalField::DatasetId => "datasetId",
            CanonicalField::IngestType => "ingestType",
            CanonicalField::Status => "status",
            CanonicalField::StatusFlag => "statusFlag",
            CanonicalField::SanityReason => "sanityReason",
            CanonicalField::MaxDateStatus => "maxDateStatus",
            CanonicalField::SanityRunDate => "sanityRunDate",
            CanonicalField::OldCount => "oldCount",
            CanonicalField::NewCount => "newCount",
            CanonicalField::DateMatchPct => "dateMatchPct",
            CanonicalField::DateUnmatchPct => "dateUnmatchPct",
            CanonicalField::DataMatchPct => "dataMatchPct",
            CanonicalField::DataUnmatchPct => "dataUnmatchPct",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CanonicalField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CanonicalField::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown field: {}", s))
    }
}

/// Which report a table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "PartialOK")]
    PartialOk,
    NotOk,
    Summary,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Ok,
        Category::PartialOk,
        Category::NotOk,
        Category::Summary,
    ];

    /// The three mutually-exclusive outcome categories.
    pub const OUTCOMES: [Category; 3] = [Category::Ok, Category::PartialOk, Category::NotOk];

    /// Human-readable label used in charts.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Ok => "OK",
            Category::PartialOk => "Partial OK",
            Category::NotOk => "Not OK",
            Category::Summary => "Summary",
        }
    }

    /// Whether the dashboard can run without this report.
    pub fn is_required(&self) -> bool {
        !matches!(self, Category::Summary)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "ok" => Ok(Category::Ok),
            "partial" | "partialok" => Ok(Category::PartialOk),
            "notok" => Ok(Category::NotOk),
            "summary" | "notoksummary" => Ok(Category::Summary),
            _ => Err(format!(
                "Unknown category: {}. Use ok, partial, not-ok, or summary.",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_round_trips_through_name() {
        for field in CanonicalField::ALL {
            assert_eq!(field.name().parse::<CanonicalField>().unwrap(), field);
        }
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("not-ok".parse::<Category>().unwrap(), Category::NotOk);
        assert_eq!("Partial OK".parse::<Category>().unwrap(), Category::PartialOk);
        assert!("bogus".parse::<Category>().is_err());
    }

    #[test]
    fn test_summary_is_optional() {
        assert!(Category::Ok.is_required());
        assert!(!Category::Summary.is_required());
    }
}
