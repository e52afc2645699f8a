//! Immutable in-memory table.

use serde::Serialize;

use super::cell::Cell;

/// Parsed tabular data: ordered headers and one cell per header in every row.
///
/// Tables are never modified in place. Every derived operation builds a new one.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a new table, padding short rows with [`Cell::Absent`] and
    /// truncating long ones to the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Absent);
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Build a table from raw string fields.
    pub fn from_raw<H, R, S>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let headers = headers.into_iter().map(Into::into).collect();
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|s| Cell::from_raw(s.as_ref())).collect())
            .collect();
        Self::new(headers, rows)
    }

    /// A table with the same headers and the given rows.
    pub fn with_rows(&self, rows: Vec<Vec<Cell>>) -> Self {
        Self::new(self.headers.clone(), rows)
    }

    /// A table with the same headers and the rows at `indices`, in that order.
    pub fn select_rows(&self, indices: impl IntoIterator<Item = usize>) -> Self {
        let rows = indices
            .into_iter()
            .filter_map(|i| self.rows.get(i).cloned())
            .collect();
        Self {
            headers: self.headers.clone(),
            rows,
        }
    }

    /// A copy of this table with `name` set to `values`.
    ///
    /// Replaces the column if it already exists, otherwise appends it.
    pub fn with_column(&self, name: &str, values: Vec<Cell>) -> Self {
        let mut headers = self.headers.clone();
        let index = match self.column_index(name) {
            Some(i) => i,
            None => {
                headers.push(name.to_string());
                headers.len() - 1
            }
        };
        let mut values = values.into_iter();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row.resize(headers.len(), Cell::Absent);
                row[index] = values.next().unwrap_or(Cell::Absent);
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Cell> {
        self.rows
            .iter()
            .map(move |row| row.get(index).unwrap_or(&Cell::Absent))
    }

    /// Get a column by name.
    pub fn column_by_name(&self, name: &str) -> Option<Vec<&Cell>> {
        let index = self.column_index(name)?;
        Some(self.column_values(index).collect())
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_raw(
            ["Dataset ID", "old count"],
            vec![vec!["DS-1", "10"], vec!["DS-2", ""]],
        )
    }

    #[test]
    fn test_pads_short_rows() {
        let table = Table::from_raw(["a", "b", "c"], vec![vec!["1"]]);
        assert_eq!(table.get(0, 2), Some(&Cell::Absent));
        assert_eq!(table.rows()[0].len(), 3);
    }

    #[test]
    fn test_with_column_appends_without_touching_source() {
        let table = sample();
        let derived = table.with_column("Count Diff", vec![Cell::Number(1.0), Cell::Absent]);

        assert_eq!(table.column_count(), 2);
        assert_eq!(derived.headers(), &["Dataset ID", "old count", "Count Diff"]);
        assert_eq!(derived.get(0, 2), Some(&Cell::Number(1.0)));
    }

    #[test]
    fn test_with_column_replaces_existing() {
        let derived = sample().with_column("old count", vec![Cell::Number(3.0), Cell::Number(4.0)]);
        assert_eq!(derived.column_count(), 2);
        assert_eq!(derived.get(1, 1), Some(&Cell::Number(4.0)));
    }
}
