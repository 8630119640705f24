//! Gettext PO catalog parser.
//!
//! Raw text goes through two stages, leaves first:
//! - `lines`: physical lines are numbered and joined at continuation quotes
//! - `entries`: a line-category automaton groups logical lines into entries
//!
//! The parser recognizes a simplified PO grammar and is not a validator.

pub mod entries;
pub mod lines;

pub use entries::{Entry, ParseError, StringRecord, extract_entries};
pub use lines::{LogicalLine, SourceLine, join_lines, source_lines};

/// Parse PO file content into its checkable entries.
pub fn parse_catalog(content: &str) -> Result<Vec<Entry>, ParseError> {
    extract_entries(&join_lines(&source_lines(content)))
}
