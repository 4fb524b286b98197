use std::process::ExitCode;

/// Exit status of the CLI.
///
/// - `Success` (0): the run completed, including runs that reported issues
///   in individual files and watch sessions ended by Ctrl+C
/// - `Error` (2): the run could not start (bad configuration, missing locales root)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The run completed.
    Success,
    /// The run could not be performed.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
