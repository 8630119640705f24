//! CLI argument definitions using clap.
//!
//! pocheck takes PO files (or directories containing them) and a check
//! selection. `-a`, `-e` and `-d` are mutually exclusive; that is validated
//! by `CheckSelection::from_flags` so the error reads the same whether the
//! selection comes from here or from library callers.

use std::path::PathBuf;

use clap::Parser;

use crate::rules::CHECKS;

#[derive(Debug, Parser)]
#[command(
    name = "pocheck",
    author,
    version,
    about,
    long_about = None,
    after_help = checks_help()
)]
pub struct Arguments {
    /// PO file(s) to check (UTF-8); directories are searched for *.po files
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Perform all checks
    #[arg(short = 'a', long = "all-checks")]
    pub all_checks: bool,

    /// Perform only checks X, Y, Z
    #[arg(short, long, value_name = "XYZ")]
    pub enable: Vec<String>,

    /// Perform all checks except X, Y, Z
    #[arg(short, long, value_name = "XYZ")]
    pub disable: Vec<String>,

    /// Print a table of findings per file and check
    #[arg(short, long)]
    pub summary: bool,

    /// Skip files starting with a byte-order mark instead of ignoring the mark
    #[arg(long)]
    pub reject_bom: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// List of available checks for the help text; `*` marks default checks.
fn checks_help() -> String {
    let mut help = String::from(
        "Default if none of -a, -e, -d is given: perform checks marked with *.\n\n\
         Available checks: Find...\n",
    );
    for check in &CHECKS {
        help.push_str(&format!(
            "  {}{} {}\n",
            check.id,
            if check.default_enabled { "*" } else { " " },
            check.description
        ));
    }
    help
}
