//! CSV/TSV parser with delimiter detection.

use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::source::SourceMetadata;
use crate::error::{Result, VerdictError};
use crate::table::{Cell, Table};

/// Delimiters to try when auto-detecting.
pub(crate) const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Parser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Parses delimited report bytes into [`Table`]s.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file from disk.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
        let path = path.as_ref();
        let contents = std::fs::read(path).map_err(|e| VerdictError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.parse_named(&name, &contents)
    }

    /// Parse an uploaded report, returning the table and its metadata.
    ///
    /// `name` only labels errors and metadata.
    pub fn parse_named(&self, name: &str, bytes: &[u8]) -> Result<(Table, SourceMetadata)> {
        let ingestion_error = |message: String| VerdictError::Ingestion {
            source_name: name.to_string(),
            message,
        };

        if std::str::from_utf8(bytes).is_err() {
            return Err(ingestion_error("input is not valid UTF-8".to_string()));
        }

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(bytes)?,
        };

        let table = self
            .parse_bytes(bytes, delimiter)
            .map_err(|e| match e {
                VerdictError::Csv(err) => ingestion_error(err.to_string()),
                other => other,
            })?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        let metadata = SourceMetadata::new(
            name.to_string(),
            content_hash(bytes),
            bytes.len() as u64,
            format,
            table.row_count(),
            table.column_count(),
        );

        tracing::info!(
            source = name,
            rows = metadata.row_count,
            columns = metadata.column_count,
            format = %metadata.format,
            "ingested report"
        );

        Ok((table, metadata))
    }

    /// Parse bytes with a known delimiter.
    pub fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();

        if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
            return Err(VerdictError::EmptyData("No header row found".to_string()));
        }

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            rows.push(record.iter().map(Cell::from_raw).collect());
        }

        Ok(Table::new(headers, rows))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// SHA-256 digest of the raw bytes, `sha256:<hex>`.
pub fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("sha256:{:x}", hasher.finalize())
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .map_while(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(VerdictError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let variance: f64 = if counts.len() > 1 {
            let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / counts.len() as f64
        } else {
            0.0
        };

        // Higher count with lower variance wins; tab gets a small bonus since it
        // rarely appears inside values.
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"a,b,c\n1,2,3\n4,5,6";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        let data = b"a\tb\tc\n1\t2\t3\n4\t5\t6";
        assert_eq!(detect_delimiter(data).unwrap(), b'\t');
    }

    #[test]
    fn test_detect_delimiter_ignores_quoted_commas() {
        let data = b"Dataset ID;Sanity reason\nDS-1;\"Case 1, rows differ\"\nDS-2;Case 2";
        assert_eq!(detect_delimiter(data).unwrap(), b';');
    }

    #[test]
    fn test_parse_csv() {
        let parser = Parser::new();
        let data = b"Dataset ID,Ingest type,old count\nDS-1,full,10\nDS-2,NA,";
        let table = parser.parse_bytes(data, b',').unwrap();

        assert_eq!(table.headers(), &["Dataset ID", "Ingest type", "old count"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 0), Some(&Cell::Text("DS-1".into())));
        assert_eq!(table.get(1, 1), Some(&Cell::Absent));
        assert_eq!(table.get(1, 2), Some(&Cell::Absent));
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let (table, meta) = Parser::new()
            .parse_named("ok.csv", b"Dataset ID,Status\n")
            .unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 2);
        assert_eq!(meta.row_count, 0);
    }

    #[test]
    fn test_empty_input_is_error() {
        let err = Parser::new().parse_named("ok.csv", b"").unwrap_err();
        assert!(matches!(err, VerdictError::EmptyData(_)));
    }

    #[test]
    fn test_invalid_utf8_is_ingestion_error() {
        let err = Parser::new()
            .parse_named("bad.csv", &[0xff, 0xfe, b',', b'\n'])
            .unwrap_err();
        assert!(matches!(err, VerdictError::Ingestion { .. }));
    }

    #[test]
    fn test_hash_is_stable() {
        assert_eq!(content_hash(b"abc"), content_hash(b"abc"));
        assert!(content_hash(b"abc").starts_with("sha256:"));
        assert_ne!(content_hash(b"abc"), content_hash(b"abd"));
    }
}
