//! Text-derived labels: sanity-reason case numbers and the run date.

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::{CanonicalField, CanonicalSchema};
use crate::table::{Cell, Table};

/// Label for values with no recognizable case number.
pub const UNKNOWN_CASE: &str = "Unknown";

/// Sentinel returned when no run date is available.
pub const NOT_AVAILABLE: &str = "N/A";

static CASE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)case\s*(\d+)").expect("case pattern is valid"));

/// Extract `"Case {n}"` from a sanity-reason cell.
///
/// Absent cells and text without a case number map to [`UNKNOWN_CASE`].
pub fn extract_case_label(cell: &Cell) -> String {
    if cell.is_absent() {
        return UNKNOWN_CASE.to_string();
    }
    case_label_from_str(&cell.to_string())
}

/// String form of [`extract_case_label`].
pub fn case_label_from_str(text: &str) -> String {
    CASE_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|digits| format!("Case {}", digits.as_str()))
        .unwrap_or_else(|| UNKNOWN_CASE.to_string())
}

/// Ordering for case labels: `"Case n"` labels compare by their number,
/// anything else compares lexically by its literal string.
pub fn compare_case_labels(a: &str, b: &str) -> Ordering {
    match (case_number(a), case_number(b)) {
        (Some(x), Some(y)) => compare_digit_strings(x, y).then_with(|| a.cmp(b)),
        _ => a.cmp(b),
    }
}

fn case_number(label: &str) -> Option<&str> {
    let digits = label.strip_prefix("Case ")?;
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(digits)
}

/// Numeric comparison of arbitrarily long decimal digit strings.
fn compare_digit_strings(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// First non-empty `sanity run date` cell, or [`NOT_AVAILABLE`].
///
/// Every run-date spelling present is tried in alias order; an all-empty
/// column falls through to the next one.
pub fn first_non_empty_date(table: &Table, schema: &CanonicalSchema) -> String {
    schema
        .candidates(CanonicalField::SanityRunDate)
        .iter()
        .find_map(|&index| table.column_values(index).find(|c| !c.is_absent()))
        .map(|cell| cell.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
