use std::io;

use anyhow::Result;

mod args;
mod exit_status;
pub mod report;
mod run;
pub mod summary;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use summary::{FileSummary, RunSummary};

/// Run pocheck with parsed arguments, writing to stdout and stderr.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    run::run(args, &mut out, &mut err)
}
