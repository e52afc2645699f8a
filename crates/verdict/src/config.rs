//! Engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VerdictError};
use crate::export::DEFAULT_SHEET_NAME_LIMIT;
use crate::input::ParserConfig;
use crate::schema::AliasTable;

/// Configuration for a [`Session`](crate::Session).
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerdictConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Accepted header spellings per canonical field.
    pub aliases: AliasTable,
    /// Maximum characters in a workbook sheet name.
    pub sheet_name_limit: usize,
    /// Buckets in the `% data match` histogram.
    pub histogram_buckets: usize,
    /// Rows in the lowest-data-match table.
    pub bottom_n: usize,
}

impl Default for VerdictConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            aliases: AliasTable::default(),
            sheet_name_limit: DEFAULT_SHEET_NAME_LIMIT,
            histogram_buckets: 20,
            bottom_n: 10,
        }
    }
}

impl VerdictConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| VerdictError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.sheet_name_limit == 0 {
            return Err(VerdictError::Config(
                "sheet_name_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn with_sheet_name_limit(mut self, limit: usize) -> Self {
        self.sheet_name_limit = limit;
        self
    }

    pub fn with_histogram_buckets(mut self, buckets: usize) -> Self {
        self.histogram_buckets = buckets;
        self
    }

    pub fn with_bottom_n(mut self, n: usize) -> Self {
        self.bottom_n = n;
        self
    }
}
