use anyhow::{Ok, Result};
use calamine::{Reader, open_workbook_auto};

use crate::{CliTest, stderr_of, stdout_of};

fn write_sample_sheets(test: &CliTest) -> Result<()> {
    test.write_file(
        "translation_sheets/01_SUMMARY.csv",
        "Translation Summary,\nTotal Strings Found:,2\n",
    )?;
    test.write_file(
        "translation_sheets/02_Authentication.csv",
        "English Text,Screen/Context,Notes\nLogin,LoginScreen,Button label\nWelcome Back,LoginScreen,\n",
    )?;
    test.write_file(
        "translation_sheets/03_Dialogs_&_Popups.csv",
        "English Text,Screen/Context,Notes\nAre you sure?,ConfirmDialog,\n",
    )?;
    Ok(())
}

#[test]
fn test_convert_combines_csv_files() -> Result<()> {
    let test = CliTest::new()?;
    write_sample_sheets(&test)?;

    let output = test
        .convert_command()
        .args(["translation_sheets", "-o", "Combined.xlsx"])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("Wrote workbook: Combined.xlsx (3 sheets)"));

    let mut workbook = open_workbook_auto(test.root().join("Combined.xlsx"))?;
    let names = workbook.sheet_names().to_vec();
    assert_eq!(names, vec!["SUMMARY", "Authentication", "Dialogs & Popups"]);

    let range = workbook.worksheet_range("Authentication")?;
    assert_eq!(range.height(), 3); // header + 2 records
    assert_eq!(
        range.get_value((1, 0)).map(|v| v.to_string()),
        Some("Login".to_string())
    );

    Ok(())
}

#[test]
fn test_convert_reads_bom_prefixed_files() -> Result<()> {
    let test = CliTest::new()?;
    std::fs::create_dir_all(test.root().join("sheets"))?;
    std::fs::write(
        test.root().join("sheets/00_Authentication.csv"),
        b"\xef\xbb\xbfEnglish Text,Notes\nLogin,\n",
    )?;

    let output = test
        .convert_command()
        .args(["sheets", "-o", "Combined.xlsx"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));

    let mut workbook = open_workbook_auto(test.root().join("Combined.xlsx"))?;
    let range = workbook.worksheet_range("Authentication")?;
    assert_eq!(
        range.get_value((0, 0)).map(|v| v.to_string()),
        Some("English Text".to_string())
    );

    Ok(())
}

#[test]
fn test_convert_missing_directory_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.convert_command().arg("no_such_dir").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("CSV directory not found"));

    Ok(())
}

#[test]
fn test_convert_empty_directory_fails() -> Result<()> {
    let test = CliTest::new()?;
    std::fs::create_dir_all(test.root().join("empty"))?;

    let output = test.convert_command().arg("empty").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("No CSV files found"));

    Ok(())
}

#[test]
fn test_convert_skips_unreadable_file_and_fails() -> Result<()> {
    let test = CliTest::new()?;
    write_sample_sheets(&test)?;
    // Invalid UTF-8 makes this file unreadable as CSV text.
    std::fs::write(
        test.root().join("translation_sheets/04_Broken.csv"),
        [0xff, 0xfe, 0x00, 0x41],
    )?;

    let output = test
        .convert_command()
        .args(["translation_sheets", "-o", "Combined.xlsx"])
        .output()?;

    // The workbook is still written from the good files, but the run reports
    // the bad one and exits non-zero.
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("could not be parsed"));
    assert!(stderr_of(&output).contains("04_Broken.csv"));
    assert!(test.root().join("Combined.xlsx").exists());

    let mut workbook = open_workbook_auto(test.root().join("Combined.xlsx"))?;
    assert_eq!(workbook.sheet_names().to_vec().len(), 3);

    Ok(())
}
