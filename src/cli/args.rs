//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all locbook
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `build`: Generate the translation workbook from an extracted-strings dump
//! - `convert`: Combine a directory of CSV sheets into one XLSX workbook
//! - `notifications`: Generate the push-notification documentation workbook
//! - `init`: Initialize a locbook configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Build(cmd)) => cmd.common.verbose,
            Some(Command::Convert(cmd)) => cmd.common.verbose,
            Some(Command::Notifications(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all emitting commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format for emitting commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum OutputFormat {
    /// Try XLSX first, fall back to CSV files if the workbook write fails
    Auto,
    /// Single XLSX workbook
    Xlsx,
    /// One CSV file per sheet
    Csv,
}

#[derive(Debug, Args)]
pub struct BuildCommand {
    /// Extracted-strings JSON dump
    #[arg(default_value = "translation_strings.json")]
    pub strings_file: PathBuf,

    /// Output workbook path (defaults to <appName>_Translation_Master.xlsx)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "auto")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ConvertCommand {
    /// Directory containing the CSV sheets to combine
    #[arg(default_value = "translation_sheets")]
    pub csv_dir: PathBuf,

    /// Output workbook path (defaults to <appName>_Translation_Master.xlsx)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct NotificationsCommand {
    /// Output workbook path
    #[arg(short, long, default_value = "Notifications_Documentation.xlsx")]
    pub output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "auto")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the translation workbook from an extracted-strings JSON dump
    Build(BuildCommand),
    /// Combine a directory of CSV sheets into a single XLSX workbook
    Convert(ConvertCommand),
    /// Generate the push-notification documentation workbook
    Notifications(NotificationsCommand),
    /// Initialize a new .locbookrc.json configuration file
    Init,
}
