use std::process::ExitCode;

use super::commands::CommandResult;
use super::exit_status::ExitStatus;

pub fn exit_code_from_result(result: &CommandResult) -> ExitCode {
    if result.error_count > 0 {
        ExitStatus::Failure.into()
    } else {
        ExitStatus::Success.into()
    }
}
