//! Single-table CSV export.

use csv::{QuoteStyle, Writer, WriterBuilder};

use crate::error::Result;
use crate::input::DELIMITERS;
use crate::table::Table;

/// Serialize a table as comma-separated text: header row, then every row.
///
/// Absent cells are written empty; no index column is added.
pub fn to_delimited_bytes(table: &Table) -> Result<Vec<u8>> {
    to_delimited_bytes_with(table, b',')
}

/// Like [`to_delimited_bytes`] with a chosen delimiter.
///
/// A header that contains another delimiter the parser would detect is
/// written fully quoted, so re-ingesting the bytes finds `delimiter` again.
pub fn to_delimited_bytes_with(table: &Table, delimiter: u8) -> Result<Vec<u8>> {
    let header_style = if table.headers().iter().any(|h| has_foreign_delimiter(h, delimiter)) {
        QuoteStyle::Always
    } else {
        QuoteStyle::Necessary
    };

    let mut header = WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(header_style)
        .from_writer(Vec::new());
    header.write_record(table.headers())?;

    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(finish(header)?);
    for row in table.rows() {
        writer.write_record(row.iter().map(|cell| cell.to_string()))?;
    }

    finish(writer)
}

fn has_foreign_delimiter(field: &str, delimiter: u8) -> bool {
    DELIMITERS
        .iter()
        .any(|&d| d != delimiter && field.as_bytes().contains(&d))
}

fn finish(writer: Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Parser;
    use crate::table::Cell;

    #[test]
    fn test_writes_header_and_rows() {
        let table = Table::from_raw(
            ["Dataset ID", "Sanity reason"],
            vec![vec!["DS-1", "Case 1, count drift"], vec!["DS-2", ""]],
        );
        let bytes = to_delimited_bytes(&table).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Dataset ID,Sanity reason\nDS-1,\"Case 1, count drift\"\nDS-2,\n"
        );
    }

    #[test]
    fn test_derived_numbers_are_plain() {
        let table = Table::from_raw(["old count"], vec![vec!["10"]])
            .with_column("Count Diff", vec![Cell::Number(-3.0)]);
        let text = String::from_utf8(to_delimited_bytes(&table).unwrap()).unwrap();
        assert_eq!(text, "old count,Count Diff\n10,-3\n");
    }

    #[test]
    fn test_header_with_other_delimiter_survives_reparse() {
        let table = Table::from_raw(["Dataset ID;alt"], vec![vec!["DS-1"]]);
        let bytes = to_delimited_bytes(&table).unwrap();
        assert_eq!(String::from_utf8(bytes.clone()).unwrap(), "\"Dataset ID;alt\"\nDS-1\n");

        let (reparsed, _) = Parser::new().parse_named("filtered.csv", &bytes).unwrap();
        assert_eq!(reparsed.headers(), table.headers());
        assert_eq!(reparsed.rows(), table.rows());
    }

    #[test]
    fn test_tab_delimiter() {
        let table = Table::from_raw(["a", "b"], vec![vec!["1", "2"]]);
        let text = String::from_utf8(to_delimited_bytes_with(&table, b'\t').unwrap()).unwrap();
        assert_eq!(text, "a\tb\n1\t2\n");
    }
}
