use anyhow::{Context, Result};

use super::super::args::NotificationsCommand;
use super::helper::{csv_dir_for, write_book};
use super::{CommandResult, CommandSummary, NotificationsSummary};
use crate::config::load_config;
use crate::notifications::{self, Status, catalog};

pub fn notifications(cmd: NotificationsCommand) -> Result<CommandResult> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let config = load_config(&cwd)?.config;

    let generated_on = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let book = notifications::build_book(&generated_on, &config.project.app_name);

    let outcome = write_book(&book, cmd.format, &cmd.output, &csv_dir_for(&cmd.output))?;

    let specs = catalog::all();
    let active = specs.iter().filter(|s| s.status == Status::Active).count();

    Ok(CommandResult::clean(CommandSummary::Notifications(
        NotificationsSummary {
            total: specs.len(),
            active,
            pending: specs.len() - active,
            backend: outcome.backend,
            fallback_error: outcome.fallback_error,
            outputs: outcome.paths,
        },
    )))
}
