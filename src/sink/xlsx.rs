//! XLSX workbook backend.
//!
//! Renders the whole book into one workbook with the house styling: blue
//! header rows, bordered wrapped cells, frozen header panes and autofilters
//! on data sheets, title and section styling on summary sheets.

use std::path::PathBuf;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};

use super::BookSink;
use crate::book::{Book, Sheet, SheetKind};

const HEADER_BG: u32 = 0x4472C4;
const TITLE_BG: u32 = 0x2E75B6;
const SECTION_BG: u32 = 0xD9E1F2;
const WHITE: u32 = 0xFFFFFF;

/// Rows whose first cell ends with ':' and stays under this length are
/// treated as section headers on summary sheets.
const SECTION_LABEL_MAX_LEN: usize = 50;

pub struct XlsxSink {
    path: PathBuf,
}

impl XlsxSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

struct SheetFormats {
    header: Format,
    title: Format,
    section: Format,
    cell: Format,
}

fn formats() -> SheetFormats {
    SheetFormats {
        header: Format::new()
            .set_bold()
            .set_font_color(WHITE)
            .set_background_color(HEADER_BG)
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter),
        title: Format::new()
            .set_bold()
            .set_font_size(16)
            .set_font_color(WHITE)
            .set_background_color(TITLE_BG),
        section: Format::new().set_bold().set_background_color(SECTION_BG),
        cell: Format::new()
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::Left)
            .set_align(FormatAlign::Top)
            .set_text_wrap(),
    }
}

impl BookSink for XlsxSink {
    fn write(&self, book: &Book) -> Result<Vec<PathBuf>> {
        let mut workbook = Workbook::new();
        let formats = formats();

        for sheet in &book.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&sheet.name)?;

            match sheet.kind {
                SheetKind::Data => write_data_sheet(worksheet, sheet, &formats)?,
                SheetKind::Summary | SheetKind::Instructions => {
                    write_label_sheet(worksheet, sheet, &formats)?
                }
            }

            for (col, width) in sheet.column_widths.iter().enumerate() {
                worksheet.set_column_width(col as u16, *width)?;
            }
        }

        workbook
            .save(&self.path)
            .with_context(|| format!("Failed to write workbook: {}", self.path.display()))?;

        Ok(vec![self.path.clone()])
    }
}

fn write_data_sheet(worksheet: &mut Worksheet, sheet: &Sheet, formats: &SheetFormats) -> Result<()> {
    for (col, header) in sheet.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, header, &formats.header)?;
    }

    for (row, cells) in sheet.rows.iter().enumerate() {
        for (col, value) in cells.iter().enumerate() {
            worksheet.write_string_with_format(row as u32 + 1, col as u16, value, &formats.cell)?;
        }
    }

    worksheet.set_freeze_panes(1, 0)?;
    if !sheet.rows.is_empty() {
        worksheet.autofilter(
            0,
            0,
            sheet.rows.len() as u32,
            sheet.headers.len().saturating_sub(1) as u16,
        )?;
    }

    Ok(())
}

fn write_label_sheet(
    worksheet: &mut Worksheet,
    sheet: &Sheet,
    formats: &SheetFormats,
) -> Result<()> {
    for (row, cells) in sheet.rows.iter().enumerate() {
        let row = row as u32;
        if row == 0 {
            // Title row, merged across the first two columns.
            let title = cells.first().map(String::as_str).unwrap_or_default();
            worksheet.merge_range(0, 0, 0, 1, title, &formats.title)?;
            continue;
        }

        let is_section = cells
            .first()
            .is_some_and(|label| label.ends_with(':') && label.chars().count() < SECTION_LABEL_MAX_LEN);

        for (col, value) in cells.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            if is_section {
                worksheet.write_string_with_format(row, col as u16, value, &formats.section)?;
            } else {
                worksheet.write_string(row, col as u16, value)?;
            }
        }
    }

    Ok(())
}
