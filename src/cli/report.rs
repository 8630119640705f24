//! Report formatting and printing.
//!
//! Findings are streamed to stdout one file at a time, in the plain
//! `path:line: text` layout editors understand. Separate from the checking
//! logic so pocheck can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::summary::{FileSummary, RunSummary};
use crate::core::{FileOutcome, FileReport};
use crate::issues::{Issue, Report, Severity};
use crate::rules::EnabledChecks;

/// Encoding of everything pocheck prints.
pub const OUTPUT_ENCODING: &str = "UTF-8";

const TOTAL_LABEL: &str = "total";
const SKIPPED_LABEL: &str = "skipped";

/// Print the header naming the encoding and the enabled checks.
pub fn print_header<W: Write>(checks: &EnabledChecks, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "# Encoding: {}", OUTPUT_ENCODING)?;
    writeln!(writer, "#")?;
    writeln!(writer, "# Enabled checks: Find...")?;
    for check in checks.all() {
        writeln!(writer, "#  {}: {}", check.id, check.description)?;
    }
    writeln!(writer, "#")
}

/// Print every issue of a checked or skipped file.
pub fn print_file_report<W: Write>(report: &FileReport, writer: &mut W) -> io::Result<()> {
    for issue in report.issues() {
        print_issue(&issue, writer)?;
    }
    Ok(())
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) -> io::Result<()> {
    let headline = match issue.severity() {
        Severity::Error => issue.headline().bold().red(),
        Severity::Warning => issue.headline().yellow(),
    };
    writeln!(writer)?;
    writeln!(writer, "{}: -- {}", issue.file_path(), headline)?;
    for (line, text) in issue.context_lines() {
        writeln!(writer, "{}:{}: {}", issue.file_path(), line, text)?;
    }
    Ok(())
}

/// Advisory for a stripped byte-order mark.
pub fn print_bom_warning<W: Write>(report: &FileReport, writer: &mut W) -> io::Result<()> {
    if let FileOutcome::Checked {
        byte_order_mark: true,
        ..
    } = report.outcome
    {
        writeln!(
            writer,
            "{} {}: ignoring byte-order mark at the start of the file",
            "warning:".bold().yellow(),
            report.path
        )?;
    }
    Ok(())
}

/// Per-file progress line for `--verbose`.
pub fn print_progress<W: Write>(report: &FileReport, writer: &mut W) -> io::Result<()> {
    match &report.outcome {
        FileOutcome::Checked {
            entries, findings, ..
        } => writeln!(
            writer,
            "{} {}: {} {}, {} {}",
            "checked".green(),
            report.path,
            entries,
            plural(*entries, "entry", "entries"),
            findings.len(),
            plural(findings.len(), "finding", "findings")
        ),
        FileOutcome::Skipped(_) => {
            writeln!(writer, "{} {}", "skipped".red(), report.path)
        }
    }
}

fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Print the fixed-column summary table and its disclaimer.
pub fn print_summary<W: Write>(summary: &RunSummary, writer: &mut W) -> io::Result<()> {
    let path_width = summary
        .files()
        .map(|(path, _)| UnicodeWidthStr::width(path))
        .chain(["File".width(), "Total".width()])
        .max()
        .unwrap_or(0);

    let count_widths: Vec<usize> = summary
        .checks()
        .iter()
        .map(|id| digits(summary.check_total(*id)).max(1))
        .collect();
    let total_width = digits(summary.total()).max(TOTAL_LABEL.len());

    writeln!(writer)?;
    writeln!(writer, "# Summary")?;

    let mut header = pad_path("File", path_width);
    for (id, width) in summary.checks().iter().zip(&count_widths) {
        header.push_str(&format!("  {:>width$}", id, width = width));
    }
    header.push_str(&format!("  {:>width$}", TOTAL_LABEL, width = total_width));
    writeln!(writer, "{}", header.trim_end())?;

    for (path, file) in summary.files() {
        let mut row = pad_path(path, path_width);
        match file {
            FileSummary::Counted(_) => {
                for (id, width) in summary.checks().iter().zip(&count_widths) {
                    row.push_str(&format!("  {:>width$}", file.count(*id), width = width));
                }
                row.push_str(&format!("  {:>width$}", file.total(), width = total_width));
            }
            FileSummary::Skipped => {
                row.push_str("  ");
                row.push_str(SKIPPED_LABEL);
            }
        }
        writeln!(writer, "{}", row.trim_end())?;
    }

    let mut totals = pad_path("Total", path_width);
    for (id, width) in summary.checks().iter().zip(&count_widths) {
        totals.push_str(&format!(
            "  {:>width$}",
            summary.check_total(*id),
            width = width
        ));
    }
    totals.push_str(&format!("  {:>width$}", summary.total(), width = total_width));
    writeln!(writer, "{}", totals.trim_end())?;

    writeln!(writer)?;
    writeln!(
        writer,
        "# Note: items are extracted with simplified patterns, so these counts may"
    )?;
    writeln!(
        writer,
        "# include false positives and miss real mismatches."
    )
}

fn pad_path(path: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(path));
    format!("{}{}", path, " ".repeat(padding))
}

fn digits(n: usize) -> usize {
    n.to_string().len()
}
