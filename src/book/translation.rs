//! Translation workbook layout.
//!
//! Builds the logical workbook handed to translators: an instructions sheet,
//! a summary sheet with per-category counts and a progress tracker, and one
//! data sheet per populated category.

use crate::book::{Book, Sheet};
use crate::buckets::GroupedStrings;
use crate::config::ProjectInfo;
use crate::strings::Metadata;

pub const DATA_HEADERS: [&str; 3] = ["English Text", "Screen/Context", "Notes"];

const DATA_WIDTHS: [f64; 3] = [60.0, 40.0, 50.0];
const SUMMARY_WIDTHS: [f64; 4] = [40.0, 20.0, 15.0, 12.0];
const INSTRUCTIONS_WIDTHS: [f64; 2] = [60.0, 30.0];

/// Assemble the full translation workbook.
///
/// `cleaned_total` is the post-filter, post-merge string count shown in the
/// summary (it includes records that ended up unrecognized, matching what the
/// cleaning pass actually produced).
pub fn build_book(
    grouped: &GroupedStrings,
    metadata: &Metadata,
    project: &ProjectInfo,
    cleaned_total: usize,
) -> Book {
    let mut sheets = vec![
        instructions_sheet(metadata, project, cleaned_total),
        summary_sheet(grouped, metadata, cleaned_total),
    ];

    for (category, records) in grouped.populated() {
        let mut sheet = Sheet::data(category.as_str(), &DATA_HEADERS, &DATA_WIDTHS);
        for record in records {
            sheet.push_row(vec![
                record.text.clone(),
                record.screen_context.clone(),
                record.notes.clone(),
            ]);
        }
        sheets.push(sheet);
    }

    Book::new(sheets)
}

fn instructions_sheet(metadata: &Metadata, project: &ProjectInfo, cleaned_total: usize) -> Sheet {
    let mut sheet = Sheet::instructions("Instructions", &INSTRUCTIONS_WIDTHS);

    sheet.push_pair(format!("{} Translation Guide", project.app_name), "");
    sheet.push_blank();
    sheet.push_pair("Project Information:", "");
    sheet.push_pair("App Name:", project.app_name.clone());
    sheet.push_pair("Type:", project.app_type.clone());
    sheet.push_pair("Platform:", project.platform.clone());
    sheet.push_pair("Extracted Date:", metadata.extraction_date());
    sheet.push_pair("Total Strings:", cleaned_total.to_string());
    sheet.push_blank();
    sheet.push_pair("How to Use This Workbook:", "");
    sheet.push_pair("   - Each sheet represents a different section of the app", "");
    sheet.push_pair("   - Column A: English Text - The original text to translate", "");
    sheet.push_pair("   - Column B: Screen/Context - Where this text appears in the app", "");
    sheet.push_pair("   - Column C: Notes - Additional context about the string", "");
    sheet.push_blank();
    sheet.push_pair("Translation Guidelines:", "");
    sheet.push_pair("   - Keep the same tone and style as the English text", "");
    sheet.push_pair("   - For button labels, keep translations concise", "");
    sheet.push_pair("   - Placeholders like {count}, {name}, $variable should NOT be translated", "");
    sheet.push_pair("   - Maintain similar text length for UI elements", "");
    sheet.push_pair("   - Error messages should be clear and helpful", "");
    sheet.push_pair("   - Questions should end with appropriate punctuation", "");
    sheet.push_blank();
    sheet.push_pair("Adding Your Translation:", "");
    sheet.push_pair("   - Option 1: Add a new column (D, E, etc.) for each target language", "");
    sheet.push_pair("   - Option 2: Create a copy of this file for each language", "");
    sheet.push_pair("   - Include the language code in the column header (e.g., \"Spanish (es)\")", "");
    sheet.push_blank();
    sheet.push_pair("Quality Assurance:", "");
    sheet.push_pair("   - Review translations in context of their screen", "");
    sheet.push_pair("   - Check that button labels fit on buttons", "");
    sheet.push_pair("   - Test that placeholders are preserved correctly", "");
    sheet.push_blank();
    sheet.push_pair("Questions or Issues?", "");
    sheet.push_pair("Contact the development team for clarification on any strings.", "");

    sheet
}

fn summary_sheet(grouped: &GroupedStrings, metadata: &Metadata, cleaned_total: usize) -> Sheet {
    let mut sheet = Sheet::summary("Summary", &SUMMARY_WIDTHS);

    sheet.push_pair("Translation Summary", "");
    sheet.push_blank();
    sheet.push_pair("Extraction Date:", metadata.extraction_date());
    sheet.push_pair("Total Strings Found:", cleaned_total.to_string());
    sheet.push_pair("Files Processed:", metadata.files_processed.to_string());
    sheet.push_blank();
    sheet.push_pair("Strings by Category:", "Count");
    for (category, records) in grouped.populated() {
        sheet.push_pair(category.clone(), records.len().to_string());
    }

    sheet.push_blank();
    sheet.push_pair("Translation Progress Tracker:", "");
    sheet.push_pair("(Update this as you complete translation)", "");
    sheet.push_blank();
    sheet.push_row(vec![
        "Category".to_string(),
        "Total Strings".to_string(),
        "Translated".to_string(),
        "Progress %".to_string(),
    ]);
    for (category, records) in grouped.populated() {
        sheet.push_row(vec![
            category.clone(),
            records.len().to_string(),
            "0".to_string(),
            "0%".to_string(),
        ]);
    }

    sheet
}
