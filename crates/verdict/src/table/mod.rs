//! Tagged-cell tables shared by every engine component.

mod cell;
#[allow(clippy::module_inception)]
mod table;

pub use cell::Cell;
pub use table::Table;
