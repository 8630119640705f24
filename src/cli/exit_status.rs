use std::process::ExitCode;

/// Exit status of a pocheck run.
///
/// - `Success` (0): every file was checked and nothing was found
/// - `Failure` (1): findings were reported or a file was skipped
/// - `Error` (1): the run was aborted (invalid arguments, unreadable file, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure | ExitStatus::Error => ExitCode::from(1),
        }
    }
}
