//! Report formatting and printing utilities.
//!
//! Command results are printed in a compact colored format: a ✓ line naming
//! the output, an indented breakdown of what went into it, and warnings on
//! stderr for anything that was left out.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    BuildSummary, CommandResult, CommandSummary, ConvertSummary, InitSummary,
    NotificationsSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::sink::Backend;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
    print_warnings_to(result, verbose, &mut io::stderr().lock());
}

/// Print the command summary to a custom writer. Useful for testing.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Build(summary) => print_build(summary, verbose, writer),
        CommandSummary::Convert(summary) => print_convert(summary, verbose, writer),
        CommandSummary::Notifications(summary) => print_notifications(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

/// Print warnings (anything left out of the report) to a custom writer.
pub fn print_warnings_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Build(summary) => print_build_warnings(summary, verbose, writer),
        CommandSummary::Convert(summary) => print_convert_errors(summary, writer),
        CommandSummary::Notifications(summary) => {
            print_fallback_warning(summary.fallback_error.as_deref(), writer);
        }
        CommandSummary::Init(_) => {}
    }
}

fn print_fallback_warning<W: Write>(fallback_error: Option<&str>, writer: &mut W) {
    if let Some(err) = fallback_error {
        let _ = writeln!(
            writer,
            "{} xlsx backend failed ({}); wrote CSV sheets instead",
            "warning:".bold().yellow(),
            err
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_outputs<W: Write>(label: &str, summary_paths: &[std::path::PathBuf], writer: &mut W) {
    let shown = summary_paths
        .first()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let suffix = if summary_paths.len() > 1 {
        format!(" (and {} more files)", summary_paths.len() - 1)
    } else {
        String::new()
    };
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("{label}: {shown}{suffix}").green()
    );
}

fn print_build<W: Write>(summary: &BuildSummary, verbose: bool, writer: &mut W) {
    let label = match summary.backend {
        Backend::Xlsx => "Wrote translation workbook",
        Backend::Csv => "Wrote translation sheets",
    };
    print_outputs(label, &summary.outputs, writer);

    let _ = writeln!(
        writer,
        "  {} extracted strings from {} files",
        summary.input_count, summary.files_processed
    );
    let _ = writeln!(
        writer,
        "  {} technical strings skipped, {} duplicates merged",
        summary.skipped_total(),
        summary.merged_count
    );
    let _ = writeln!(
        writer,
        "  {} translatable strings across {} categories",
        summary.kept_total(),
        summary.category_counts.len()
    );

    if !summary.category_counts.is_empty() {
        let _ = writeln!(writer);
        print_count_table(&summary.category_counts, writer);
    }

    if verbose && !summary.skipped.is_empty() {
        let _ = writeln!(writer);
        let _ = writeln!(writer, "  skipped by rule:");
        let skipped: Vec<(String, usize)> = summary
            .skipped
            .iter()
            .map(|(reason, count)| (reason.to_string(), *count))
            .collect();
        print_count_table(&skipped, writer);
    }
}

fn print_count_table<W: Write>(counts: &[(String, usize)], writer: &mut W) {
    let label_width = counts
        .iter()
        .map(|(name, _)| UnicodeWidthStr::width(name.as_str()))
        .max()
        .unwrap_or(0);

    for (name, count) in counts {
        let padding = label_width - UnicodeWidthStr::width(name.as_str());
        let _ = writeln!(writer, "  {}{}  {:>4}", name, " ".repeat(padding), count);
    }
}

fn print_build_warnings<W: Write>(summary: &BuildSummary, verbose: bool, writer: &mut W) {
    print_fallback_warning(summary.fallback_error.as_deref(), writer);

    if summary.unrecognized.is_empty() {
        return;
    }

    let _ = writeln!(
        writer,
        "{} {} string(s) in unrecognized categories were left out of the report",
        "warning:".bold().yellow(),
        summary.unrecognized.len()
    );
    if verbose {
        for record in &summary.unrecognized {
            let _ = writeln!(
                writer,
                "  - \"{}\" (category: {}, screen: {})",
                record.text, record.category, record.screen_context
            );
        }
    } else {
        let _ = writeln!(writer, "  (use {} to list them)", "-v".cyan());
    }
}

fn print_convert<W: Write>(summary: &ConvertSummary, verbose: bool, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Wrote workbook: {} ({} sheet{})",
            summary.output.display(),
            summary.sheets.len(),
            if summary.sheets.len() == 1 { "" } else { "s" }
        )
        .green()
    );

    if verbose {
        let _ = writeln!(writer);
        print_count_table(&summary.sheets, writer);
    }
}

fn print_convert_errors<W: Write>(summary: &ConvertSummary, writer: &mut W) {
    if summary.failed_files.is_empty() {
        return;
    }

    let _ = writeln!(
        writer,
        "{} {} CSV file(s) could not be parsed and were left out:",
        FAILURE_MARK.red(),
        summary.failed_files.len()
    );
    for (path, error) in &summary.failed_files {
        let _ = writeln!(writer, "  {}: {}", path.display(), error);
    }
}

fn print_notifications<W: Write>(summary: &NotificationsSummary, writer: &mut W) {
    let label = match summary.backend {
        Backend::Xlsx => "Wrote notification documentation",
        Backend::Csv => "Wrote notification sheets",
    };
    print_outputs(label, &summary.outputs, writer);

    let _ = writeln!(
        writer,
        "  {} notification types ({} active, {} pending)",
        summary.total, summary.active, summary.pending
    );
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
