//! Multi-sheet XLSX export.

use chrono::NaiveDate;
use indexmap::IndexMap;
use rust_xlsxwriter::Workbook;

use crate::error::{Result, VerdictError};
use crate::numeric;
use crate::schema::Category;
use crate::table::{Cell, Table};

/// Maximum sheet-name length accepted by spreadsheet applications.
pub const DEFAULT_SHEET_NAME_LIMIT: usize = 31;

/// Named tables destined for one workbook, in sheet order.
///
/// Absent or empty tables are kept in the bundle but never written.
#[derive(Debug, Clone)]
pub struct ExportBundle<'a> {
    sheets: IndexMap<String, Option<&'a Table>>,
    name_limit: usize,
}

impl<'a> ExportBundle<'a> {
    pub fn new() -> Self {
        Self::with_name_limit(DEFAULT_SHEET_NAME_LIMIT)
    }

    pub fn with_name_limit(name_limit: usize) -> Self {
        Self {
            sheets: IndexMap::new(),
            name_limit,
        }
    }

    /// Add a sheet. The name is truncated to the bundle's limit.
    pub fn with_sheet(mut self, name: &str, table: Option<&'a Table>) -> Self {
        let name: String = name.chars().take(self.name_limit).collect();
        self.sheets.insert(name, table);
        self
    }

    /// Sheets that will actually be written.
    pub fn sheets(&self) -> impl Iterator<Item = (&str, &'a Table)> {
        self.sheets
            .iter()
            .filter_map(|(name, table)| table.filter(|t| !t.is_empty()).map(|t| (name.as_str(), t)))
    }

    /// Number of sheets that will be written.
    pub fn len(&self) -> usize {
        self.sheets().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ExportBundle<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Write the bundle as an XLSX workbook, one sheet per non-empty table.
///
/// Columns whose present cells all parse as numbers are written as numbers.
/// Other text stays text and absent cells are left blank.
pub fn to_workbook(bundle: &ExportBundle<'_>) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    for (name, table) in bundle.sheets() {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(name)?;

        for (col, header) in table.headers().iter().enumerate() {
            worksheet.write_string(0, column_number(col)?, header.as_str())?;
        }

        let numeric_cols = numeric_columns(table);

        for (i, row) in table.rows().iter().enumerate() {
            let row_number = u32::try_from(i + 1)
                .map_err(|_| VerdictError::Export(format!("sheet '{}' has too many rows", name)))?;
            for (col, cell) in row.iter().enumerate() {
                let col = column_number(col)?;
                match cell {
                    Cell::Text(s) => match numeric::coerce_str(s) {
                        Some(v) if numeric_cols[usize::from(col)] => {
                            worksheet.write_number(row_number, col, v)?;
                        }
                        _ => {
                            worksheet.write_string(row_number, col, s.as_str())?;
                        }
                    },
                    Cell::Number(v) => {
                        worksheet.write_number(row_number, col, *v)?;
                    }
                    Cell::Absent => {}
                }
            }
        }

        tracing::debug!(sheet = name, rows = table.row_count(), "wrote worksheet");
    }

    Ok(workbook.save_to_buffer()?)
}

/// Columns with at least one present cell and no non-numeric ones.
fn numeric_columns(table: &Table) -> Vec<bool> {
    (0..table.column_count())
        .map(|col| {
            let mut present = table.column_values(col).filter(|c| !c.is_absent()).peekable();
            present.peek().is_some() && present.all(|c| numeric::coerce(c).is_some())
        })
        .collect()
}

fn column_number(col: usize) -> Result<u16> {
    u16::try_from(col).map_err(|_| VerdictError::Export(format!("column {} out of range", col)))
}

/// Date-stamped file name for the full report workbook.
pub fn report_file_name(date: NaiveDate) -> String {
    format!("ocl_validation_report_{}.xlsx", date.format("%Y%m%d"))
}

/// File name for a filtered CSV download of one report.
pub fn filtered_file_name(category: Category) -> &'static str {
    match category {
        Category::Ok => "ok_datasets_filtered.csv",
        Category::PartialOk => "partial_ok_datasets_filtered.csv",
        Category::NotOk => "not_ok_datasets_filtered.csv",
        Category::Summary => "not_ok_summary_filtered.csv",
    }
}
