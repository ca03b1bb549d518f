//! Workbook output backends.
//!
//! Two interchangeable sinks render a logical `Book`: a single styled XLSX
//! workbook, or a set of CSV files (one per sheet) for environments without
//! Excel. `write_with_fallback` models the original tool's behavior of
//! preferring the spreadsheet writer and degrading to CSV when it fails.
//!
//! ## Module Structure
//!
//! - `xlsx`: single-workbook backend using rust_xlsxwriter
//! - `csv`: file-per-sheet backend using the csv crate

pub mod csv;
pub mod xlsx;

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::book::Book;

/// Which backend actually wrote the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Xlsx,
    Csv,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Xlsx => write!(f, "xlsx"),
            Backend::Csv => write!(f, "csv"),
        }
    }
}

/// A sink renders a logical `Book` to disk.
pub trait BookSink {
    /// Write the book, returning the paths created.
    fn write(&self, book: &Book) -> Result<Vec<PathBuf>>;
}

/// Outcome of a write, including whether the XLSX backend was bypassed.
#[derive(Debug)]
pub struct WriteOutcome {
    pub backend: Backend,
    pub paths: Vec<PathBuf>,
    /// The XLSX error that forced the CSV fallback, when it happened.
    pub fallback_error: Option<String>,
}

/// Try the XLSX backend first; on failure, write CSV files instead.
pub fn write_with_fallback(book: &Book, xlsx_path: &Path, csv_dir: &Path) -> Result<WriteOutcome> {
    match xlsx::XlsxSink::new(xlsx_path).write(book) {
        Ok(paths) => Ok(WriteOutcome {
            backend: Backend::Xlsx,
            paths,
            fallback_error: None,
        }),
        Err(err) => {
            let paths = csv::CsvSink::new(csv_dir).write(book)?;
            Ok(WriteOutcome {
                backend: Backend::Csv,
                paths,
                fallback_error: Some(format!("{err:#}")),
            })
        }
    }
}
