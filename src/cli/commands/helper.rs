use std::path::{Path, PathBuf};

use anyhow::Result;

use super::super::args::OutputFormat;
use crate::book::Book;
use crate::sink::{self, Backend, BookSink, WriteOutcome, csv::CsvSink, xlsx::XlsxSink};

/// Default workbook path for a project: `<AppName>_Translation_Master.xlsx`
/// with path-hostile characters replaced.
pub fn default_workbook_path(app_name: &str) -> PathBuf {
    let stem = app_name.replace([' ', '/'], "_");
    PathBuf::from(format!("{stem}_Translation_Master.xlsx"))
}

/// Directory the CSV backend writes into, derived from the workbook path:
/// `out/Book.xlsx` -> `out/Book_sheets`.
pub fn csv_dir_for(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("workbook");
    output.with_file_name(format!("{stem}_sheets"))
}

/// Write a book with the requested format, resolving `Auto` to
/// try-XLSX-then-CSV.
pub fn write_book(
    book: &Book,
    format: OutputFormat,
    xlsx_path: &Path,
    csv_dir: &Path,
) -> Result<WriteOutcome> {
    match format {
        OutputFormat::Auto => sink::write_with_fallback(book, xlsx_path, csv_dir),
        OutputFormat::Xlsx => Ok(WriteOutcome {
            backend: Backend::Xlsx,
            paths: XlsxSink::new(xlsx_path).write(book)?,
            fallback_error: None,
        }),
        OutputFormat::Csv => Ok(WriteOutcome {
            backend: Backend::Csv,
            paths: CsvSink::new(csv_dir).write(book)?,
            fallback_error: None,
        }),
    }
}
