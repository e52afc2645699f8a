//! Input parsing and report metadata.

mod parser;
mod source;

pub(crate) use parser::DELIMITERS;
pub use parser::{Parser, ParserConfig, content_hash};
pub use source::SourceMetadata;
