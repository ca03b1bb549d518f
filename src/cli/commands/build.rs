use anyhow::{Context, Result};

use super::super::args::BuildCommand;
use super::helper::{csv_dir_for, default_workbook_path, write_book};
use super::{BuildSummary, CommandResult, CommandSummary};
use crate::book::translation;
use crate::buckets::{CategoryOrder, group_by_category};
use crate::config::load_config;
use crate::dedup::merge_duplicates;
use crate::rules::{Policy, RejectReason};
use crate::strings::{StringRecord, load_strings_file};

pub fn build(cmd: BuildCommand) -> Result<CommandResult> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let config = load_config(&cwd)?.config;

    let file = load_strings_file(&cmd.strings_file)?;
    let input_count = file.strings.len();

    // Classify: keep user-facing strings, count rejections per rule.
    let policy = Policy::new(&config.technical_keywords);
    let mut reject_counts = [0usize; 5];
    let mut kept: Vec<StringRecord> = Vec::new();
    for record in file.strings {
        match policy.classify(&record.text) {
            Some(reason) => {
                let slot = RejectReason::all()
                    .iter()
                    .position(|r| *r == reason)
                    .unwrap_or_default();
                reject_counts[slot] += 1;
            }
            None => kept.push(record),
        }
    }
    let skipped: Vec<(RejectReason, usize)> = RejectReason::all()
        .into_iter()
        .zip(reject_counts)
        .filter(|(_, count)| *count > 0)
        .collect();

    // Merge duplicates, then partition into the configured category order.
    let kept_count = kept.len();
    let deduped = merge_duplicates(kept);
    let merged_count = kept_count - deduped.len();
    let cleaned_total = deduped.len();

    let order = CategoryOrder::new(&config.categories);
    let grouped = group_by_category(deduped, &order);

    let book = translation::build_book(&grouped, &file.metadata, &config.project, cleaned_total);

    let output = cmd
        .output
        .unwrap_or_else(|| default_workbook_path(&config.project.app_name));
    let outcome = write_book(&book, cmd.format, &output, &csv_dir_for(&output))?;

    let category_counts = grouped
        .populated()
        .map(|(name, records)| (name.clone(), records.len()))
        .collect();

    Ok(CommandResult::clean(CommandSummary::Build(BuildSummary {
        input_count,
        files_processed: file.metadata.files_processed,
        skipped,
        merged_count,
        category_counts,
        unrecognized: grouped.unrecognized,
        backend: outcome.backend,
        fallback_error: outcome.fallback_error,
        outputs: outcome.paths,
    })))
}
