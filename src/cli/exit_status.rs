use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for batch
/// tools.
///
/// - `Success` (0): Command completed; warnings may have been printed
/// - `Failure` (1): Command completed but some inputs could not be processed
/// - `Error` (2): Command failed outright (bad input file, I/O error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed; warnings may have been printed.
    Success,
    /// Command completed but some inputs could not be processed.
    Failure,
    /// Command failed outright (bad input file, I/O error, etc.).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
