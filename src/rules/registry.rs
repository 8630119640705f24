//! The fixed set of checks.
//!
//! Every check extracts an ordered list of items from the unquoted content of
//! a string. How the items of an original and a translation are compared
//! depends on the check's [`CheckKind`].

use std::{fmt, sync::LazyLock};

use regex::Regex;

/// Single-character check identifier, as used on the command line.
pub type CheckId = char;

/// How a check compares an original string with its translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    /// Items of original and translation must be equal, in order.
    Match,
    /// Original and translation must have the same number of items.
    MatchCount,
    /// Any item in a translation is reported; the original is not consulted.
    Search,
}

impl CheckKind {
    /// `Match` and `MatchCount` compare against the original.
    pub fn is_match_like(self) -> bool {
        matches!(self, CheckKind::Match | CheckKind::MatchCount)
    }
}

/// Names of a check's items in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemNames {
    pub singular: &'static str,
    pub plural: &'static str,
    /// Used when the number is not known, e.g. "format specifier(s)".
    pub unknown: &'static str,
}

/// Item extraction strategy.
#[derive(Clone, Copy)]
pub enum Extractor {
    /// All non-overlapping matches of a pattern, left to right.
    Pattern(&'static LazyLock<Regex>),
    /// `&` keyboard accelerators; needs a look-behind the `regex` crate lacks.
    Accelerator,
}

impl Extractor {
    pub fn extract<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self {
            Extractor::Pattern(regex) => regex.find_iter(text).map(|m| m.as_str()).collect(),
            Extractor::Accelerator => find_accelerators(text),
        }
    }
}

impl fmt::Debug for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extractor::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            Extractor::Accelerator => f.write_str("Accelerator"),
        }
    }
}

/// A check definition. Immutable; results are returned per call.
#[derive(Debug, Clone, Copy)]
pub struct CheckDefinition {
    pub id: CheckId,
    pub kind: CheckKind,
    /// Short description, completing the phrase "Find...".
    pub description: &'static str,
    pub items: ItemNames,
    pub default_enabled: bool,
    pub extractor: Extractor,
}

// Ids are unique within `CHECKS`.
impl PartialEq for CheckDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CheckDefinition {}

impl CheckDefinition {
    /// Items of this check found in `text`, in order of occurrence.
    pub fn extract<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.extractor.extract(text)
    }
}

static FORMAT_SPECIFIER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%.").unwrap());
// \' and \" are left out, they would mostly produce noise.
static ESCAPE_SEQUENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[nrt\\]").unwrap());
static TRAILING_ELLIPSIS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\.\.\.|\x{2026})$").unwrap());
static OUTER_WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]+|[ \t]+$").unwrap());
static DOUBLE_SPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"  ").unwrap());
static SPACE_LINEBREAK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" \\[nr]").unwrap());
static TAB_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\t").unwrap());

/// All checks, in ascending id order.
pub static CHECKS: [CheckDefinition; 8] = [
    CheckDefinition {
        id: 'a',
        kind: CheckKind::MatchCount,
        description: "mismatched keyboard accelerators (&<non-&/whitespace character>)",
        items: ItemNames {
            singular: "keyboard accelerator",
            plural: "keyboard accelerators",
            unknown: "keyboard accelerator(s)",
        },
        default_enabled: false,
        extractor: Extractor::Accelerator,
    },
    CheckDefinition {
        id: 'e',
        kind: CheckKind::Match,
        description: r"mismatched escape sequences (\n, \r, \t, \\)",
        items: ItemNames {
            singular: "escape sequence",
            plural: "escape sequences",
            unknown: "escape sequence(s)",
        },
        default_enabled: false,
        extractor: Extractor::Pattern(&ESCAPE_SEQUENCE_REGEX),
    },
    CheckDefinition {
        id: 'f',
        kind: CheckKind::Match,
        description: "mismatched format specifiers (%<arbitrary character>)",
        items: ItemNames {
            singular: "format specifier",
            plural: "format specifiers",
            unknown: "format specifier(s)",
        },
        default_enabled: true,
        extractor: Extractor::Pattern(&FORMAT_SPECIFIER_REGEX),
    },
    CheckDefinition {
        id: 'i',
        kind: CheckKind::MatchCount,
        description: "mismatched trailing ellipses (..., <ellipsis>)",
        items: ItemNames {
            singular: "trailing ellipsis",
            plural: "trailing ellipses",
            unknown: "trailing ellipsis/ellipses",
        },
        default_enabled: false,
        extractor: Extractor::Pattern(&TRAILING_ELLIPSIS_REGEX),
    },
    CheckDefinition {
        id: 'l',
        kind: CheckKind::Search,
        description: r"space-linebreak escape sequence combinations ( <\n or \r>)",
        items: ItemNames {
            singular: "space-linebreak escape sequence combination",
            plural: "space-linebreak escape sequence combinations",
            unknown: "space-linebreak escape sequence combination(s)",
        },
        default_enabled: true,
        extractor: Extractor::Pattern(&SPACE_LINEBREAK_REGEX),
    },
    CheckDefinition {
        id: 's',
        kind: CheckKind::Search,
        description: "double spaces",
        items: ItemNames {
            singular: "double space",
            plural: "double spaces",
            unknown: "double space(s)",
        },
        default_enabled: true,
        extractor: Extractor::Pattern(&DOUBLE_SPACE_REGEX),
    },
    CheckDefinition {
        id: 't',
        kind: CheckKind::Search,
        description: "tab characters",
        items: ItemNames {
            singular: "tab character",
            plural: "tab characters",
            unknown: "tab character(s)",
        },
        default_enabled: false,
        extractor: Extractor::Pattern(&TAB_REGEX),
    },
    CheckDefinition {
        id: 'w',
        kind: CheckKind::Match,
        description: "mismatched leading/trailing whitespace (space, tab)",
        items: ItemNames {
            singular: "occurrence of leading/trailing whitespace",
            plural: "occurrences of leading/trailing whitespace",
            unknown: "occurrence(s) of leading/trailing whitespace",
        },
        default_enabled: false,
        extractor: Extractor::Pattern(&OUTER_WHITESPACE_REGEX),
    },
];

/// Look up a check by id.
pub fn find(id: CheckId) -> Option<&'static CheckDefinition> {
    CHECKS.iter().find(|check| check.id == id)
}

/// Marker character of keyboard accelerators.
const ACCELERATOR_MARKER: char = '&';

/// Whitespace as understood by the accelerator check (ASCII only).
fn is_ascii_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Find `&x` accelerators, where `x` is neither `&` nor whitespace and the
/// `&` is not preceded by another `&`. `&&` is an escaped literal ampersand.
fn find_accelerators(text: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut previous: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c == ACCELERATOR_MARKER
            && previous != Some(ACCELERATOR_MARKER)
            && let Some(&(next_start, next)) = chars.peek()
            && next != ACCELERATOR_MARKER
            && !is_ascii_space(next)
        {
            let end = next_start + next.len_utf8();
            found.push(&text[start..end]);
            chars.next();
            previous = Some(next);
            continue;
        }
        previous = Some(c);
    }

    found
}
