//! Chart-ready aggregations over the outcome reports.

mod cases;
mod crosstab;
mod dataset;
mod status;

pub use cases::case_distribution;
pub use crosstab::{
    CategoryTable, category_distribution, cross_tabulate, ingest_type_distribution,
    max_date_distribution,
};
pub use dataset::{ChartDataset, ChartPoint};
pub use status::{StatusClass, StatusFlagTally, classify_status_flag};
