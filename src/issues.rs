//! Issue types produced by checking PO files.
//!
//! Each issue is self-contained with all information the reporter needs:
//! the file, the lines involved and a rendered headline.

use enum_dispatch::enum_dispatch;

use crate::core::parsers::po::{ParseError, StringRecord};
use crate::rules::registry::{CheckDefinition, CheckKind};

// ============================================================
// Severity
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The file could not be checked.
    Error,
    /// A potential mismatch; may be a false positive.
    Warning,
}

// ============================================================
// Findings
// ============================================================

/// How the items of a translation differ from those of the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    TooFew,
    TooMany,
    /// Same number of items, different items or order.
    Unexpected,
}

/// Compare items extracted from an original and a translation.
///
/// `MatchCount` only looks at the number of items; `Match` also requires
/// the same items in the same order. `Search` checks never mismatch.
pub fn compare<T: PartialEq>(kind: CheckKind, expected: &[T], found: &[T]) -> Option<Mismatch> {
    if kind == CheckKind::Search {
        return None;
    }
    if expected.len() > found.len() {
        Some(Mismatch::TooFew)
    } else if expected.len() < found.len() {
        Some(Mismatch::TooMany)
    } else if kind == CheckKind::Match && expected != found {
        Some(Mismatch::Unexpected)
    } else {
        None
    }
}

/// Items involved in a finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingDetail {
    /// A `Match`/`MatchCount` check disagreed with the original.
    Mismatch {
        mismatch: Mismatch,
        expected: Vec<String>,
        found: Vec<String>,
    },
    /// A `Search` check found unwanted items in the translation.
    Occurrences { found: Vec<String> },
}

/// A potential problem in one translation of an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub check: &'static CheckDefinition,
    pub file_path: String,
    pub original: StringRecord,
    pub translation: StringRecord,
    pub detail: FindingDetail,
}

impl Finding {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    /// "too few format specifiers", "Found double space(s)", ...
    pub fn message(&self) -> String {
        let items = &self.check.items;
        match &self.detail {
            FindingDetail::Mismatch { mismatch, .. } => match mismatch {
                Mismatch::TooFew => format!("too few {}", items.plural),
                Mismatch::TooMany => format!("too many {}", items.plural),
                Mismatch::Unexpected => format!("unexpected {}", items.unknown),
            },
            FindingDetail::Occurrences { .. } => format!("Found {}", items.unknown),
        }
    }

    /// Items found in the translation.
    pub fn found(&self) -> &[String] {
        match &self.detail {
            FindingDetail::Mismatch { found, .. } | FindingDetail::Occurrences { found } => found,
        }
    }
}

/// Items are escaped so tabs and quotes stay visible on one line.
fn quote_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("{:?}", item))
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================
// File-level issues
// ============================================================

/// A file whose structure the entry parser rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailureIssue {
    pub file_path: String,
    pub error: ParseError,
}

impl ParseFailureIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }
}

/// A file skipped because it starts with a byte-order mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteOrderMarkIssue {
    pub file_path: String,
}

impl ByteOrderMarkIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An issue found while checking a file.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Finding(Finding),
    ParseFailure(ParseFailureIssue),
    ByteOrderMark(ByteOrderMarkIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::Finding(_) => Finding::severity(),
            Issue::ParseFailure(_) => ParseFailureIssue::severity(),
            Issue::ByteOrderMark(_) => ByteOrderMarkIssue::severity(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to the CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    fn file_path(&self) -> &str;

    /// Text following `<path>: -- ` on the first line of the issue.
    fn headline(&self) -> String;

    /// Lines to quote below the headline, as (line number, text).
    fn context_lines(&self) -> Vec<(usize, &str)> {
        Vec::new()
    }
}

impl Report for Finding {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn headline(&self) -> String {
        match &self.detail {
            FindingDetail::Mismatch {
                expected, found, ..
            } => match self.check.kind {
                CheckKind::MatchCount => format!(
                    "Potential mismatch: {} - expected {}, got {}",
                    self.message(),
                    expected.len(),
                    found.len()
                ),
                CheckKind::Match | CheckKind::Search => format!(
                    "Potential mismatch: {} - expected [{}], got [{}]",
                    self.message(),
                    quote_items(expected),
                    quote_items(found)
                ),
            },
            FindingDetail::Occurrences { .. } => {
                format!("{}: [{}]", self.message(), quote_items(self.found()))
            }
        }
    }

    fn context_lines(&self) -> Vec<(usize, &str)> {
        vec![
            (self.original.line_number, self.original.raw.as_str()),
            (self.translation.line_number, self.translation.raw.as_str()),
        ]
    }
}

impl Report for ParseFailureIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn headline(&self) -> String {
        "Parsing error. Invalid PO file?".to_string()
    }

    fn context_lines(&self) -> Vec<(usize, &str)> {
        vec![(self.error.line_number, self.error.text.as_str())]
    }
}

impl Report for ByteOrderMarkIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn headline(&self) -> String {
        "Skipped: unexpected byte-order mark".to_string()
    }
}

// ============================================================
// Tests
// ============================================================
