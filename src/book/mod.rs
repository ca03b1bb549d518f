//! Backend-neutral workbook model.
//!
//! A `Book` describes a report as a list of sheets with rows and presentation
//! kinds. The sinks in `crate::sink` turn a `Book` into an XLSX workbook or a
//! set of CSV files; nothing above the sink layer knows which backend runs.
//!
//! ## Module Structure
//!
//! - `translation`: builds the translation workbook from grouped strings

pub mod translation;

/// Excel caps sheet names at 31 characters.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// How a sheet should be presented by a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    /// Tabular data: styled header row, frozen panes, autofilter.
    Data,
    /// Label/value rows with a title row and section styling.
    Summary,
    /// Free-form guidance; the CSV sink renders this as a text file.
    Instructions,
}

/// One sheet of a logical workbook.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    pub kind: SheetKind,
    /// Header row for `Data` sheets; empty for the other kinds.
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Column widths in character units, applied positionally where present.
    pub column_widths: Vec<f64>,
}

impl Sheet {
    pub fn data(name: impl Into<String>, headers: &[&str], column_widths: &[f64]) -> Self {
        Self {
            name: sanitize_sheet_name(&name.into()),
            kind: SheetKind::Data,
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            column_widths: column_widths.to_vec(),
        }
    }

    pub fn summary(name: impl Into<String>, column_widths: &[f64]) -> Self {
        Self {
            name: sanitize_sheet_name(&name.into()),
            kind: SheetKind::Summary,
            headers: Vec::new(),
            rows: Vec::new(),
            column_widths: column_widths.to_vec(),
        }
    }

    pub fn instructions(name: impl Into<String>, column_widths: &[f64]) -> Self {
        Self {
            name: sanitize_sheet_name(&name.into()),
            kind: SheetKind::Instructions,
            headers: Vec::new(),
            rows: Vec::new(),
            column_widths: column_widths.to_vec(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Label/value convenience for summary and instructions sheets.
    pub fn push_pair(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.rows.push(vec![label.into(), value.into()]);
    }

    pub fn push_blank(&mut self) {
        self.rows.push(vec![String::new(), String::new()]);
    }
}

/// A logical workbook: sheets in display order.
#[derive(Debug, Clone)]
pub struct Book {
    pub sheets: Vec<Sheet>,
}

impl Book {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }
}

/// Make a sheet name Excel-safe: characters Excel forbids in sheet names are
/// replaced with '-', and the result is truncated to the 31-character limit.
pub fn sanitize_sheet_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '-',
            c => c,
        })
        .take(MAX_SHEET_NAME_LEN)
        .collect()
}
