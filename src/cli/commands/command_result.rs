use std::path::PathBuf;

use crate::rules::RejectReason;
use crate::sink::Backend;
use crate::strings::StringRecord;

#[derive(Debug)]
pub enum CommandSummary {
    Build(BuildSummary),
    Convert(ConvertSummary),
    Notifications(NotificationsSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct BuildSummary {
    /// Raw string count in the input dump.
    pub input_count: usize,
    /// Source-file count reported by the extraction pass.
    pub files_processed: usize,
    /// Rejected strings per reason, in rule order; zero-count reasons omitted.
    pub skipped: Vec<(RejectReason, usize)>,
    /// Duplicate occurrences folded into an existing record.
    pub merged_count: usize,
    /// Records that made it into the workbook, per populated category.
    pub category_counts: Vec<(String, usize)>,
    /// Records whose category is not in the configured order.
    pub unrecognized: Vec<StringRecord>,
    pub backend: Backend,
    /// XLSX error that forced the CSV fallback, when it happened.
    pub fallback_error: Option<String>,
    pub outputs: Vec<PathBuf>,
}

impl BuildSummary {
    pub fn skipped_total(&self) -> usize {
        self.skipped.iter().map(|(_, count)| count).sum()
    }

    pub fn kept_total(&self) -> usize {
        self.category_counts.iter().map(|(_, count)| count).sum()
    }
}

#[derive(Debug)]
pub struct ConvertSummary {
    /// Sheets written to the workbook, with their row counts.
    pub sheets: Vec<(String, usize)>,
    /// CSV files that could not be parsed and were left out.
    pub failed_files: Vec<(PathBuf, String)>,
    pub output: PathBuf,
}

#[derive(Debug)]
pub struct NotificationsSummary {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub backend: Backend,
    pub fallback_error: Option<String>,
    pub outputs: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a locbook command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Hard errors the command survived (e.g. unparseable CSV inputs).
    /// Non-zero means the process exits with a failure code.
    pub error_count: usize,
}

impl CommandResult {
    pub fn clean(summary: CommandSummary) -> Self {
        Self {
            summary,
            error_count: 0,
        }
    }
}
