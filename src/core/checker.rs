//! Checking a single PO file.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::parsers::po::{ParseError, parse_catalog};
use crate::issues::{ByteOrderMarkIssue, Finding, Issue, ParseFailureIssue};
use crate::rules::{EnabledChecks, check_entries};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// What to do with a file starting with a byte-order mark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BomPolicy {
    /// Strip it and check the file, with an advisory warning.
    #[default]
    Strip,
    /// Skip the file.
    Reject,
}

/// Why a file was not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Parse(ParseError),
    ByteOrderMark,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Checked {
        /// Number of entries the parser extracted.
        entries: usize,
        findings: Vec<Finding>,
        /// A leading byte-order mark was stripped.
        byte_order_mark: bool,
    },
    Skipped(SkipReason),
}

/// Outcome of checking one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: String,
    pub outcome: FileOutcome,
}

impl FileReport {
    /// True when the file was checked and nothing was found.
    pub fn is_clean(&self) -> bool {
        matches!(&self.outcome, FileOutcome::Checked { findings, .. } if findings.is_empty())
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.outcome, FileOutcome::Skipped(_))
    }

    pub fn findings(&self) -> &[Finding] {
        match &self.outcome {
            FileOutcome::Checked { findings, .. } => findings,
            FileOutcome::Skipped(_) => &[],
        }
    }

    /// Findings and skip reasons as reportable issues, in file order.
    pub fn issues(&self) -> Vec<Issue> {
        match &self.outcome {
            FileOutcome::Checked { findings, .. } => {
                findings.iter().cloned().map(Issue::Finding).collect()
            }
            FileOutcome::Skipped(SkipReason::Parse(error)) => {
                vec![Issue::ParseFailure(ParseFailureIssue {
                    file_path: self.path.clone(),
                    error: error.clone(),
                })]
            }
            FileOutcome::Skipped(SkipReason::ByteOrderMark) => {
                vec![Issue::ByteOrderMark(ByteOrderMarkIssue {
                    file_path: self.path.clone(),
                })]
            }
        }
    }
}

/// Check already loaded file content.
pub fn check_content(
    path: &str,
    content: &str,
    checks: &EnabledChecks,
    bom_policy: BomPolicy,
) -> FileReport {
    let (content, byte_order_mark) = match content.strip_prefix(BYTE_ORDER_MARK) {
        Some(rest) => (rest, true),
        None => (content, false),
    };

    let outcome = if byte_order_mark && bom_policy == BomPolicy::Reject {
        FileOutcome::Skipped(SkipReason::ByteOrderMark)
    } else {
        match parse_catalog(content) {
            Ok(entries) => FileOutcome::Checked {
                entries: entries.len(),
                findings: check_entries(path, &entries, checks),
                byte_order_mark,
            },
            Err(error) => FileOutcome::Skipped(SkipReason::Parse(error)),
        }
    };

    FileReport {
        path: path.to_string(),
        outcome,
    }
}

/// Read and check a PO file.
///
/// Fails only if the file cannot be read as UTF-8 text; structural problems
/// are reported through [`FileOutcome::Skipped`].
pub fn check_file(path: &Path, checks: &EnabledChecks, bom_policy: BomPolicy) -> Result<FileReport> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read file \"{}\"", path.display()))?;
    Ok(check_content(
        &path.to_string_lossy(),
        &content,
        checks,
        bom_policy,
    ))
}
