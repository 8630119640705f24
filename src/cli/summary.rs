//! Per-file finding counts accumulated over a run.

use std::collections::BTreeMap;

use crate::core::{FileOutcome, FileReport};
use crate::rules::{CheckId, EnabledChecks};

/// Counts for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSummary {
    /// Findings per enabled check; every enabled check has an entry.
    Counted(BTreeMap<CheckId, usize>),
    /// The file could not be checked.
    Skipped,
}

impl FileSummary {
    pub fn count(&self, id: CheckId) -> usize {
        match self {
            FileSummary::Counted(counts) => counts.get(&id).copied().unwrap_or(0),
            FileSummary::Skipped => 0,
        }
    }

    pub fn total(&self) -> usize {
        match self {
            FileSummary::Counted(counts) => counts.values().sum(),
            FileSummary::Skipped => 0,
        }
    }
}

/// Summary of a whole run, keyed by file path.
#[derive(Debug, Clone)]
pub struct RunSummary {
    checks: Vec<CheckId>,
    files: BTreeMap<String, FileSummary>,
}

impl RunSummary {
    pub fn new(checks: &EnabledChecks) -> Self {
        Self {
            checks: checks.ids(),
            files: BTreeMap::new(),
        }
    }

    pub fn record(&mut self, report: &FileReport) {
        let summary = match &report.outcome {
            FileOutcome::Checked { findings, .. } => {
                let mut counts: BTreeMap<CheckId, usize> =
                    self.checks.iter().map(|id| (*id, 0)).collect();
                for finding in findings {
                    *counts.entry(finding.check.id).or_default() += 1;
                }
                FileSummary::Counted(counts)
            }
            FileOutcome::Skipped(_) => FileSummary::Skipped,
        };
        self.files.insert(report.path.clone(), summary);
    }

    /// Enabled check ids, in column order.
    pub fn checks(&self) -> &[CheckId] {
        &self.checks
    }

    pub fn files(&self) -> impl Iterator<Item = (&str, &FileSummary)> {
        self.files.iter().map(|(path, summary)| (path.as_str(), summary))
    }

    /// Findings of one check over all files.
    pub fn check_total(&self, id: CheckId) -> usize {
        self.files.values().map(|summary| summary.count(id)).sum()
    }

    /// Findings over all checks and files.
    pub fn total(&self) -> usize {
        self.files.values().map(FileSummary::total).sum()
    }
}
