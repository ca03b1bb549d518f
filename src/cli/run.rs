use anyhow::Result;

use super::args::{Arguments, Command};
use super::commands::CommandResult;
use super::commands::{
    build::build, convert::convert, init::init, notifications::notifications,
};

/// Dispatch to the appropriate command handler based on the parsed arguments.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Build(cmd)) => build(cmd),
        Some(Command::Convert(cmd)) => convert(cmd),
        Some(Command::Notifications(cmd)) => notifications(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
