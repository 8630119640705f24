//! Drives a full pocheck run: selection, config, files, reports, summary.

use std::{env, io::Write};

use anyhow::{Context, Result};
use colored::Colorize;

use super::{
    args::Arguments,
    exit_status::ExitStatus,
    report::{print_bom_warning, print_file_report, print_header, print_progress, print_summary},
    summary::RunSummary,
};
use crate::config::load_config;
use crate::core::{BomPolicy, check_file, collect_files};
use crate::rules::CheckSelection;

const WRITE_ERROR: &str = "Cannot write output";

/// Check every file named by `args`, streaming reports to `out` and
/// diagnostics to `err`.
///
/// Files are processed one at a time in sorted order, so everything printed
/// before a fatal error (an unreadable file, a closed pipe) stays valid.
pub fn run<W: Write, E: Write>(args: Arguments, out: &mut W, err: &mut E) -> Result<ExitStatus> {
    let checks = CheckSelection::from_flags(args.all_checks, &args.enable, &args.disable)
        .and_then(|selection| selection.resolve())
        .context("Invalid check selection")?;

    let cwd = env::current_dir().context("Cannot determine current directory")?;
    let loaded = load_config(&cwd)?;
    let config = loaded.config;

    if args.verbose
        && let Some(path) = &loaded.path
    {
        writeln!(err, "using config {}", path.display()).context(WRITE_ERROR)?;
    }

    let bom_policy = if args.reject_bom || config.reject_byte_order_mark {
        BomPolicy::Reject
    } else {
        BomPolicy::Strip
    };

    let files = collect_files(&args.files, &config.ignore_patterns())?;
    if files.is_empty() {
        writeln!(err, "{} no PO files to check", "warning:".bold().yellow()).context(WRITE_ERROR)?;
    }

    print_header(&checks, out).context(WRITE_ERROR)?;

    let mut summary = RunSummary::new(&checks);
    let mut clean = true;

    for path in &files {
        let report = check_file(path, &checks, bom_policy)?;

        print_bom_warning(&report, err).context(WRITE_ERROR)?;
        print_file_report(&report, out).context(WRITE_ERROR)?;
        if args.verbose {
            print_progress(&report, err).context(WRITE_ERROR)?;
        }

        clean &= report.is_clean();
        summary.record(&report);
    }

    if args.summary || config.summary {
        print_summary(&summary, out).context(WRITE_ERROR)?;
    }
    out.flush().context(WRITE_ERROR)?;

    Ok(if clean {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    })
}
