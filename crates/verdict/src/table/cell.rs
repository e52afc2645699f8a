//! Tagged cell values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::numeric;

/// Tokens read as a missing value, compared case-insensitively after trimming.
const NULL_TOKENS: &[&str] = &["na", "n/a", "nan", "null", "none", "#n/a", "<na>"];

/// A single cell in a [`Table`](super::Table).
///
/// Ingestion produces `Text` or `Absent`; `Number` appears in derived columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Absent,
}

impl Cell {
    /// Build a cell from a raw delimited-text field.
    pub fn from_raw(raw: &str) -> Self {
        if Self::is_null_value(raw) {
            Cell::Absent
        } else {
            Cell::Text(raw.to_string())
        }
    }

    /// Check if a raw value represents a missing/null value.
    pub fn is_null_value(value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty() || NULL_TOKENS.iter().any(|t| trimmed.eq_ignore_ascii_case(t))
    }

    /// The cell at `index` in a row, absent when the row is shorter.
    pub fn at(row: &[Cell], index: usize) -> &Cell {
        row.get(index).unwrap_or(&Cell::Absent)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Cell::Absent)
    }

    /// Numeric value of the cell, if it parses as a finite number.
    pub fn as_number(&self) -> Option<f64> {
        numeric::coerce(self)
    }

    /// The cell's string form, or `None` when absent.
    ///
    /// Used as the grouping key for distinct counts and membership tests.
    pub fn key(&self) -> Option<String> {
        match self {
            Cell::Absent => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(v) => write!(f, "{}", v),
            Cell::Text(s) => f.write_str(s),
            Cell::Absent => Ok(()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::from_raw(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map(Cell::Number).unwrap_or(Cell::Absent)
    }
}
