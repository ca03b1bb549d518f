use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::super::args::ConvertCommand;
use super::helper::default_workbook_path;
use super::{CommandResult, CommandSummary, ConvertSummary};
use crate::book::{Book, Sheet, SheetKind, sanitize_sheet_name};
use crate::config::load_config;
use crate::sink::{BookSink, xlsx::XlsxSink};

const DATA_WIDTHS: [f64; 3] = [60.0, 40.0, 50.0];
const SUMMARY_WIDTHS: [f64; 4] = [40.0, 20.0, 15.0, 12.0];

pub fn convert(cmd: ConvertCommand) -> Result<CommandResult> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let config = load_config(&cwd)?.config;

    if !cmd.csv_dir.is_dir() {
        bail!("CSV directory not found: {}", cmd.csv_dir.display());
    }

    let mut csv_files: Vec<PathBuf> = fs::read_dir(&cmd.csv_dir)
        .with_context(|| format!("Failed to read directory: {}", cmd.csv_dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    csv_files.sort();

    if csv_files.is_empty() {
        bail!("No CSV files found in {}", cmd.csv_dir.display());
    }

    let mut sheets = Vec::new();
    let mut failed_files = Vec::new();
    for path in csv_files {
        match read_csv_rows(&path) {
            Ok(rows) => sheets.push(sheet_from_rows(&path, rows)),
            Err(err) => failed_files.push((path, format!("{err:#}"))),
        }
    }

    if sheets.is_empty() {
        bail!("None of the CSV files in {} could be parsed", cmd.csv_dir.display());
    }

    let output = cmd
        .output
        .unwrap_or_else(|| default_workbook_path(&config.project.app_name));
    XlsxSink::new(&output).write(&Book::new(sheets.clone()))?;

    let sheet_counts = sheets
        .iter()
        .map(|sheet| (sheet.name.clone(), sheet.rows.len()))
        .collect();

    let error_count = failed_files.len();
    Ok(CommandResult {
        summary: CommandSummary::Convert(ConvertSummary {
            sheets: sheet_counts,
            failed_files,
            output,
        }),
        error_count,
    })
}

fn read_csv_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("Failed to parse CSV file: {}", path.display()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Derive the sheet from a CSV file: the name comes from the file name with
/// the numeric ordering prefix stripped, and files named *SUMMARY* keep their
/// label/value layout instead of getting a header row.
fn sheet_from_rows(path: &Path, mut rows: Vec<Vec<String>>) -> Sheet {
    let name = sheet_name_from_file(path);
    let is_summary = name.to_uppercase().contains("SUMMARY");

    if is_summary {
        return Sheet {
            name,
            kind: SheetKind::Summary,
            headers: Vec::new(),
            rows,
            column_widths: SUMMARY_WIDTHS.to_vec(),
        };
    }

    let headers = if rows.is_empty() {
        Vec::new()
    } else {
        rows.remove(0)
    };
    Sheet {
        name,
        kind: SheetKind::Data,
        headers,
        rows,
        column_widths: DATA_WIDTHS.to_vec(),
    }
}

fn sheet_name_from_file(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Sheet");

    // Drop the "NN_" ordering prefix the CSV sink adds.
    let without_prefix = match stem.split_once('_') {
        Some((prefix, rest)) if !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_digit()) => {
            rest
        }
        _ => stem,
    };

    sanitize_sheet_name(&without_prefix.replace('_', " "))
}
