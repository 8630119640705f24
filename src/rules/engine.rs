//! Applies the enabled checks to parsed entries.
//!
//! Items of match-like checks are extracted from the original once per entry
//! and compared with each non-empty translation. Search checks only look at
//! translations. Within a translation, match-like checks run before search
//! checks, each group in ascending id order.

use crate::core::parsers::po::{Entry, StringRecord};
use crate::issues::{Finding, FindingDetail, compare};

use super::registry::CheckDefinition;
use super::selection::EnabledChecks;

/// Check all entries of a file, preserving entry order.
pub fn check_entries(file_path: &str, entries: &[Entry], checks: &EnabledChecks) -> Vec<Finding> {
    entries
        .iter()
        .flat_map(|entry| check_entry(file_path, entry, checks))
        .collect()
}

/// Check the translations of one entry against its original.
///
/// Entries with an empty original (such as the catalog header) and empty
/// translations (untranslated strings) are skipped.
pub fn check_entry(file_path: &str, entry: &Entry, checks: &EnabledChecks) -> Vec<Finding> {
    let original = entry.original();
    if original.content.is_empty() {
        return Vec::new();
    }

    let expected: Vec<(&'static CheckDefinition, Vec<&str>)> = checks
        .match_like()
        .iter()
        .map(|check| (*check, check.extract(&original.content)))
        .collect();

    let mut findings = Vec::new();

    for translation in entry.translations() {
        if translation.content.is_empty() {
            continue;
        }

        for (check, expected) in &expected {
            let found = check.extract(&translation.content);
            if let Some(mismatch) = compare(check.kind, expected, &found) {
                findings.push(finding(
                    *check,
                    file_path,
                    original,
                    translation,
                    FindingDetail::Mismatch {
                        mismatch,
                        expected: owned_items(expected),
                        found: owned_items(&found),
                    },
                ));
            }
        }

        for check in checks.search() {
            let found = check.extract(&translation.content);
            if !found.is_empty() {
                findings.push(finding(
                    *check,
                    file_path,
                    original,
                    translation,
                    FindingDetail::Occurrences {
                        found: owned_items(&found),
                    },
                ));
            }
        }
    }

    findings
}

fn finding(
    check: &'static CheckDefinition,
    file_path: &str,
    original: &StringRecord,
    translation: &StringRecord,
    detail: FindingDetail,
) -> Finding {
    Finding {
        check,
        file_path: file_path.to_string(),
        original: original.clone(),
        translation: translation.clone(),
        detail,
    }
}

fn owned_items(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
