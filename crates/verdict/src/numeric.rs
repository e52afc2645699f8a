//! Numeric coercion for cells that should hold numbers.
//!
//! Percentage and count columns in the validation reports routinely carry
//! placeholder rows (a trailing "Total" line, `-`, free text). Every statistic
//! and chart goes through [`coerce`], which classifies each cell as either a
//! finite number or absent and never fails.

use crate::table::Cell;

/// Coerce a cell to a finite `f64`, or `None` when it is not numeric.
pub fn coerce(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Number(v) if v.is_finite() => Some(*v),
        Cell::Number(_) | Cell::Absent => None,
        Cell::Text(s) => coerce_str(s),
    }
}

/// Coerce a raw string to a finite `f64`.
///
/// Surrounding whitespace is ignored; `inf` and `nan` spellings are rejected.
pub fn coerce_str(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
