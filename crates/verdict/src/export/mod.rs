//! CSV and workbook serialization.

mod delimited;
mod workbook;

pub use delimited::{to_delimited_bytes, to_delimited_bytes_with};
pub use workbook::{
    DEFAULT_SHEET_NAME_LIMIT, ExportBundle, filtered_file_name, report_file_name, to_workbook,
};
