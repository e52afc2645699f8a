//! Numeric summaries of the percentage columns.

mod describe;
mod histogram;
mod ranking;
mod report;

pub use describe::{FieldDescription, Measure, describe_numeric};
pub use histogram::{HistogramBucket, histogram_buckets};
pub use ranking::{PairedPoint, bottom_n, paired_series};
pub use report::SummaryReport;
