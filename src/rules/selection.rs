//! Selection of the checks to run.

use std::collections::BTreeSet;

use thiserror::Error;

use super::registry::{CHECKS, CheckDefinition, CheckId, find};

/// Invalid check selection. Reported before any file is opened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("-a, -e and -d are mutually exclusive")]
    MutuallyExclusive,
    #[error("invalid check(s): {}", .0.iter().collect::<String>())]
    InvalidChecks(BTreeSet<CheckId>),
    #[error("no checks to be processed")]
    NoChecks,
}

/// How the set of enabled checks is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CheckSelection {
    /// Checks marked as enabled by default.
    #[default]
    Default,
    All,
    /// Only the listed checks.
    Enable(BTreeSet<CheckId>),
    /// All checks except the listed ones.
    Disable(BTreeSet<CheckId>),
}

impl CheckSelection {
    /// Build a selection from command line flags.
    ///
    /// `enable` and `disable` hold the values of repeated `-e`/`-d` options;
    /// their characters are merged into one id set.
    pub fn from_flags(
        all: bool,
        enable: &[String],
        disable: &[String],
    ) -> Result<Self, SelectionError> {
        let modes = [all, !enable.is_empty(), !disable.is_empty()];
        if modes.iter().filter(|given| **given).count() > 1 {
            return Err(SelectionError::MutuallyExclusive);
        }

        let ids = |values: &[String]| -> BTreeSet<CheckId> {
            values.iter().flat_map(|v| v.chars()).collect()
        };

        Ok(if all {
            CheckSelection::All
        } else if !enable.is_empty() {
            CheckSelection::Enable(ids(enable))
        } else if !disable.is_empty() {
            CheckSelection::Disable(ids(disable))
        } else {
            CheckSelection::Default
        })
    }

    /// Validate the selection against the registry and produce the checks to run.
    pub fn resolve(&self) -> Result<EnabledChecks, SelectionError> {
        let listed = match self {
            CheckSelection::Enable(ids) | CheckSelection::Disable(ids) => Some(ids),
            CheckSelection::Default | CheckSelection::All => None,
        };
        if let Some(ids) = listed {
            let invalid: BTreeSet<CheckId> = ids
                .iter()
                .copied()
                .filter(|id| find(*id).is_none())
                .collect();
            if !invalid.is_empty() {
                return Err(SelectionError::InvalidChecks(invalid));
            }
        }

        let enabled: Vec<&'static CheckDefinition> = CHECKS
            .iter()
            .filter(|check| match self {
                CheckSelection::Default => check.default_enabled,
                CheckSelection::All => true,
                CheckSelection::Enable(ids) => ids.contains(&check.id),
                CheckSelection::Disable(ids) => !ids.contains(&check.id),
            })
            .collect();

        if enabled.is_empty() {
            return Err(SelectionError::NoChecks);
        }

        Ok(EnabledChecks::new(enabled))
    }
}

/// Checks to run, split by comparison kind and sorted by id.
#[derive(Debug, Clone)]
pub struct EnabledChecks {
    match_like: Vec<&'static CheckDefinition>,
    search: Vec<&'static CheckDefinition>,
}

impl EnabledChecks {
    pub fn new(checks: impl IntoIterator<Item = &'static CheckDefinition>) -> Self {
        let mut checks: Vec<&'static CheckDefinition> = checks.into_iter().collect();
        checks.sort_by_key(|check| check.id);
        checks.dedup_by_key(|check| check.id);

        let (match_like, search) = checks
            .into_iter()
            .partition(|check| check.kind.is_match_like());
        Self { match_like, search }
    }

    /// `Match` and `MatchCount` checks.
    pub fn match_like(&self) -> &[&'static CheckDefinition] {
        &self.match_like
    }

    /// `Search` checks.
    pub fn search(&self) -> &[&'static CheckDefinition] {
        &self.search
    }

    /// All enabled checks in id order.
    pub fn all(&self) -> Vec<&'static CheckDefinition> {
        let mut all: Vec<_> = self.match_like.iter().chain(&self.search).copied().collect();
        all.sort_by_key(|check| check.id);
        all
    }

    pub fn ids(&self) -> Vec<CheckId> {
        self.all().iter().map(|check| check.id).collect()
    }

}
