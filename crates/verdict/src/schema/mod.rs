//! Canonical schema: field names, alias tables and per-table resolution.

mod alias;
mod resolver;
mod types;

pub use alias::AliasTable;
pub use resolver::{Binding, CanonicalSchema};
pub use types::{CanonicalField, Category};
