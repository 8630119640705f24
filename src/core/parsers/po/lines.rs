//! Physical and logical lines of a PO file.
//!
//! PO strings may be split over several physical lines, each continuation
//! starting with a quotation mark:
//!
//! ```text
//! msgid ""
//! "Hello, "
//! "world"
//! ```
//!
//! The joiner folds those into a single logical line (`msgid "Hello, world"`)
//! that remembers the number of its first physical line. It knows nothing
//! about PO keywords.

/// A non-empty physical line of the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number in the file.
    pub line_number: usize,
    pub text: String,
}

impl SourceLine {
    pub fn new(line_number: usize, text: impl Into<String>) -> Self {
        Self {
            line_number,
            text: text.into(),
        }
    }
}

/// One or more physical lines joined at their quotation marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Line number of the first constituent physical line.
    pub line_number: usize,
    pub text: String,
}

impl LogicalLine {
    pub fn new(line_number: usize, text: impl Into<String>) -> Self {
        Self {
            line_number,
            text: text.into(),
        }
    }
}

/// Split file content into numbered, non-empty physical lines.
///
/// `\n`, `\r\n` and a lone `\r` each terminate a line. Empty lines are
/// dropped but still consume a line number, so later lines keep their
/// position in the file.
pub fn source_lines(content: &str) -> Vec<SourceLine> {
    content
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| SourceLine::new(index + 1, line))
        .collect()
}

/// Merge continuation lines into logical lines.
///
/// A line starting with `"` continues the current logical line: the
/// accumulator's last character (its closing quote) and the continuation's
/// first character (its opening quote) are dropped at the join point.
pub fn join_lines(lines: &[SourceLine]) -> Vec<LogicalLine> {
    let mut joined = Vec::new();
    let mut current = String::new();
    let mut current_line_number = 0;

    for line in lines {
        if let Some(continuation) = line.text.strip_prefix('"') {
            if current.is_empty() {
                current_line_number = line.line_number;
            }
            current.pop();
            current.push_str(continuation);
        } else {
            if !current.is_empty() {
                joined.push(LogicalLine::new(
                    current_line_number,
                    std::mem::take(&mut current),
                ));
            }
            current.push_str(&line.text);
            current_line_number = line.line_number;
        }
    }

    if !current.is_empty() {
        joined.push(LogicalLine::new(current_line_number, current));
    }

    joined
}
