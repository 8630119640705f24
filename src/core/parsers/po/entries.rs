//! Entry extraction from logical lines.
//!
//! A deterministic finite automaton over line categories groups the logical
//! lines of a PO file into entries. The accepted language is
//!
//! ```text
//! (comment* fuzzy? comment* (msgctxt? msgid+ msgstr+ | obsolete obsolete+))*
//! ```
//!
//! This is a recognizer, not a validator: obsolete runs (`#~`) only need two
//! or more lines, whatever they contain, and quoting is assumed well formed.
//!
//! Only two transitions carry data: a `msgid` in a fresh position starts a
//! new entry, and a `msgstr` after a non-fuzzy `msgid` appends a translation.
//! Plural `msgid_plural` lines, contexts, comments, fuzzy entries and
//! obsolete runs are consumed by the grammar without producing records.

use thiserror::Error;

use super::lines::LogicalLine;

/// Category of a logical line, the automaton's input alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCategory {
    /// `#`, `# ...`, `#. ...`, `#: ...`, `#| ...`, or `#, ...` without `fuzzy`.
    Comment = 0,
    /// `#, ...` flag comment containing `fuzzy`.
    Fuzzy = 1,
    /// `#~ ...`
    Obsolete = 2,
    /// `msgctxt ...`
    Context = 3,
    /// `msgid ...` and `msgid_plural ...`
    Original = 4,
    /// `msgstr ...` and `msgstr[n] ...`
    Translation = 5,
}

impl LineCategory {
    /// Classify a logical line by its prefix. `None` for anything else.
    pub fn classify(line: &str) -> Option<Self> {
        if line == "#" || ["#:", "# ", "#.", "#|"].iter().any(|p| line.starts_with(p)) {
            Some(Self::Comment)
        } else if line.starts_with("#,") {
            if line.contains("fuzzy") {
                Some(Self::Fuzzy)
            } else {
                Some(Self::Comment)
            }
        } else if line.starts_with("#~") {
            Some(Self::Obsolete)
        } else if line.starts_with("msgctxt") {
            Some(Self::Context)
        } else if line.starts_with("msgid") {
            Some(Self::Original)
        } else if line.starts_with("msgstr") {
            Some(Self::Translation)
        } else {
            None
        }
    }
}

/// Automaton state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Between entries; only comments seen so far.
    Idle = 0,
    /// After `msgctxt`.
    Context = 1,
    /// After one or more `msgid` lines.
    Original = 2,
    /// After one or more `msgstr` lines; the entry is complete.
    Translation = 3,
    /// After a fuzzy flag.
    Fuzzy = 4,
    FuzzyContext = 5,
    FuzzyOriginal = 6,
    FuzzyTranslation = 7,
    /// After a single `#~` line; another one must follow.
    Obsolete = 8,
    /// After two or more `#~` lines.
    ObsoleteRun = 9,
    /// Absorbing error state.
    Error = 10,
}

/// Data action attached to a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    /// Close the entry being built and start a new one with this `msgid`.
    BeginEntry,
    /// Append this `msgstr` to the entry being built.
    AppendTranslation,
}

const fn go(state: State) -> (State, Action) {
    (state, Action::None)
}

const fn begin(state: State) -> (State, Action) {
    (state, Action::BeginEntry)
}

const fn append(state: State) -> (State, Action) {
    (state, Action::AppendTranslation)
}

const ERR: (State, Action) = go(State::Error);

/// Transition table, indexed by `[state][category]`.
///
/// Columns: comment, fuzzy, obsolete, msgctxt, msgid, msgstr.
#[rustfmt::skip]
pub const TRANSITIONS: [[(State, Action); 6]; 10] = {
    use State::*;
    [
        /* Idle             */ [go(Idle),   go(Fuzzy), go(Obsolete),    go(Context),      begin(Original),   ERR],
        /* Context          */ [ERR,        ERR,       ERR,             ERR,              begin(Original),   ERR],
        /* Original         */ [ERR,        ERR,       ERR,             ERR,              go(Original),      append(Translation)],
        /* Translation      */ [go(Idle),   go(Fuzzy), go(Obsolete),    go(Context),      begin(Original),   append(Translation)],
        /* Fuzzy            */ [go(Fuzzy),  ERR,       go(Obsolete),    go(FuzzyContext), go(FuzzyOriginal), ERR],
        /* FuzzyContext     */ [ERR,        ERR,       ERR,             ERR,              go(FuzzyOriginal), ERR],
        /* FuzzyOriginal    */ [ERR,        ERR,       ERR,             ERR,              go(FuzzyOriginal), go(FuzzyTranslation)],
        /* FuzzyTranslation */ [go(Idle),   go(Fuzzy), go(Obsolete),    go(Context),      begin(Original),   go(FuzzyTranslation)],
        /* Obsolete         */ [ERR,        ERR,       go(ObsoleteRun), ERR,              ERR,               ERR],
        /* ObsoleteRun      */ [go(Idle),   go(Fuzzy), go(ObsoleteRun), go(Context),      begin(Original),   ERR],
    ]
};

/// Next state and action for `state` on a line of `category`.
///
/// The error state is absorbing, and an unclassifiable line always leads
/// into it.
pub fn transition(state: State, category: Option<LineCategory>) -> (State, Action) {
    match (state, category) {
        (State::Error, _) | (_, None) => ERR,
        (state, Some(category)) => TRANSITIONS[state as usize][category as usize],
    }
}

/// A `msgid` or `msgstr` line of an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringRecord {
    pub line_number: usize,
    /// The full logical line, keyword included.
    pub raw: String,
    /// Text between the first quotation mark and the last character.
    pub content: String,
}

impl StringRecord {
    pub fn from_line(line: &LogicalLine) -> Self {
        Self {
            line_number: line.line_number,
            raw: line.text.clone(),
            content: unquote(&line.text).to_string(),
        }
    }
}

/// Content strictly between the first `"` and the line's final character.
///
/// Without any quotation mark the content starts at the beginning of the
/// line. Escapes are left untouched.
pub fn unquote(line: &str) -> &str {
    let start = line.find('"').map(|i| i + 1).unwrap_or(0);
    let end = line.char_indices().last().map(|(i, _)| i).unwrap_or(0);
    if start < end { &line[start..end] } else { "" }
}

/// An original string followed by its translations, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    records: Vec<StringRecord>,
}

impl Entry {
    pub fn new(original: StringRecord) -> Self {
        Self {
            records: vec![original],
        }
    }

    pub fn original(&self) -> &StringRecord {
        &self.records[0]
    }

    pub fn translations(&self) -> &[StringRecord] {
        &self.records[1..]
    }

    pub fn push_translation(&mut self, record: StringRecord) {
        self.records.push(record);
    }
}

/// The automaton reached its error state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected line {line_number}: {text}")]
pub struct ParseError {
    pub line_number: usize,
    pub text: String,
}

/// Group logical lines into entries.
pub fn extract_entries(lines: &[LogicalLine]) -> Result<Vec<Entry>, ParseError> {
    let mut entries = Vec::new();
    let mut current: Option<Entry> = None;
    let mut state = State::Idle;

    for line in lines {
        let (next, action) = transition(state, LineCategory::classify(&line.text));

        if next == State::Error {
            return Err(ParseError {
                line_number: line.line_number,
                text: line.text.clone(),
            });
        }

        match action {
            Action::None => {}
            Action::BeginEntry => {
                if let Some(entry) = current.replace(Entry::new(StringRecord::from_line(line))) {
                    entries.push(entry);
                }
            }
            Action::AppendTranslation => {
                // The table only appends after a BeginEntry, so an entry exists.
                if let Some(entry) = current.as_mut() {
                    entry.push_translation(StringRecord::from_line(line));
                }
            }
        }

        state = next;
    }

    entries.extend(current);
    Ok(entries)
}
