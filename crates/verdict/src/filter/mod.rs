//! Composable, non-mutating record filters.

mod composer;
mod spec;

pub use composer::{FilteredView, apply, distinct_values};
pub use spec::{FilterCriteria, FilterSpec, Membership};
