//! Dataset counts, success rate and text-derived labels.

mod counts;
mod labels;

pub use counts::{MetricSnapshot, UniqueCount, success_rate, unique_count};
pub use labels::{
    NOT_AVAILABLE, UNKNOWN_CASE, case_label_from_str, compare_case_labels, extract_case_label,
    first_non_empty_date,
};
