//! Core checking pipeline: raw text -> logical lines -> entries -> findings.
//!
//! - `parsers`: PO catalog parsing
//! - `checker`: checking one file's content against the enabled checks
//! - `file_scanner`: expanding inputs into the sorted list of files

pub mod checker;
pub mod file_scanner;
pub mod parsers;

pub use checker::{BomPolicy, FileOutcome, FileReport, SkipReason, check_content, check_file};
pub use file_scanner::collect_files;
