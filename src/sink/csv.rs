//! CSV file-set backend.
//!
//! Writes one numbered file per sheet into an output directory: data and
//! summary sheets become CSV files, the instructions sheet becomes a plain
//! text file. CSV files start with a UTF-8 BOM so Excel detects the encoding
//! when a translator double-clicks them.

use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::BookSink;
use crate::book::{Book, Sheet, SheetKind};

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

pub struct CsvSink {
    dir: PathBuf,
}

impl CsvSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn write_csv(&self, index: usize, sheet: &Sheet) -> Result<PathBuf> {
        let path = self
            .dir
            .join(format!("{:02}_{}.csv", index, file_stem(&sheet.name)));
        let mut file = File::create(&path)
            .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
        file.write_all(UTF8_BOM)?;

        let mut writer = csv::Writer::from_writer(file);
        if sheet.kind == SheetKind::Data {
            writer.write_record(&sheet.headers)?;
        }
        for row in &sheet.rows {
            writer.write_record(row)?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;

        Ok(path)
    }

    fn write_text(&self, index: usize, sheet: &Sheet) -> Result<PathBuf> {
        let path = self
            .dir
            .join(format!("{:02}_{}.txt", index, file_stem(&sheet.name)));

        let mut content = String::new();
        for row in &sheet.rows {
            let line = row
                .iter()
                .filter(|cell| !cell.is_empty())
                .cloned()
                .collect::<Vec<_>>()
                .join(" ");
            content.push_str(line.trim_end());
            content.push('\n');
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write text file: {}", path.display()))?;

        Ok(path)
    }
}

/// File stem for a sheet name: path-hostile characters replaced, spaces
/// collapsed to underscores ("Profile & Settings" -> "Profile_&_Settings").
fn file_stem(name: &str) -> String {
    name.replace('/', "-").replace(' ', "_")
}

impl BookSink for CsvSink {
    fn write(&self, book: &Book) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create output directory: {}", self.dir.display()))?;

        let mut paths = Vec::new();
        for (index, sheet) in book.sheets.iter().enumerate() {
            let path = match sheet.kind {
                SheetKind::Instructions => self.write_text(index, sheet)?,
                SheetKind::Data | SheetKind::Summary => self.write_csv(index, sheet)?,
            };
            paths.push(path);
        }

        Ok(paths)
    }
}
