use anyhow::{Ok, Result};
use calamine::{Reader, open_workbook_auto};

use crate::{CliTest, stderr_of, stdout_of};

const SAMPLE_STRINGS: &str = r#"{
    "metadata": {
        "extractedAt": "2025-01-15T09:30:00Z",
        "totalStrings": 7,
        "filesProcessed": 3
    },
    "strings": [
        {"text": "Login", "screenContext": "LoginScreen", "category": "Authentication", "notes": "Button label"},
        {"text": "login", "screenContext": "SplashScreen", "category": "Authentication", "notes": ""},
        {"text": "Welcome Back", "screenContext": "LoginScreen", "category": "Authentication", "notes": ""},
        {"text": "Are you sure?", "screenContext": "ConfirmDialog", "category": "Dialogs & Popups", "notes": ""},
        {"text": "firebase_user_id", "screenContext": "ProfileScreen", "category": "Profile & Settings", "notes": ""},
        {"text": "OK", "screenContext": "ConfirmDialog", "category": "Dialogs & Popups", "notes": ""},
        {"text": "PremiumUser", "screenContext": "PaywallScreen", "category": "Subscription/Premium", "notes": ""}
    ]
}"#;

#[test]
fn test_build_generates_workbook() -> Result<()> {
    let test = CliTest::with_file("translation_strings.json", SAMPLE_STRINGS)?;

    let output = test
        .build_command()
        .args(["-o", "Out.xlsx"])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Wrote translation workbook: Out.xlsx"));
    assert!(stdout.contains("7 extracted strings from 3 files"));
    assert!(stdout.contains("3 technical strings skipped, 1 duplicates merged"));
    assert!(stdout.contains("3 translatable strings across 2 categories"));

    let mut workbook = open_workbook_auto(test.root().join("Out.xlsx"))?;
    let names = workbook.sheet_names().to_vec();
    assert_eq!(
        names,
        vec!["Instructions", "Summary", "Authentication", "Dialogs & Popups"]
    );

    Ok(())
}

#[test]
fn test_build_merges_duplicates_across_screens() -> Result<()> {
    let test = CliTest::with_file("translation_strings.json", SAMPLE_STRINGS)?;

    let output = test.build_command().args(["-o", "Out.xlsx"]).output()?;
    assert_eq!(output.status.code(), Some(0));

    let mut workbook = open_workbook_auto(test.root().join("Out.xlsx"))?;
    let range = workbook.worksheet_range("Authentication")?;

    // Header row plus two records: the merged "Login" and "Welcome Back".
    assert_eq!(range.height(), 3);
    assert_eq!(
        range.get_value((1, 0)).map(|v| v.to_string()),
        Some("Login".to_string())
    );
    assert_eq!(
        range.get_value((1, 1)).map(|v| v.to_string()),
        Some("LoginScreen; SplashScreen".to_string())
    );
    assert_eq!(
        range.get_value((1, 2)).map(|v| v.to_string()),
        Some("Button label".to_string())
    );
    assert_eq!(
        range.get_value((2, 0)).map(|v| v.to_string()),
        Some("Welcome Back".to_string())
    );

    Ok(())
}

#[test]
fn test_build_skips_technical_strings() -> Result<()> {
    let test = CliTest::with_file("translation_strings.json", SAMPLE_STRINGS)?;

    let output = test
        .build_command()
        .args(["-o", "Out.xlsx", "-v"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("skipped by rule:"));
    assert!(stdout.contains("technical keyword"));
    assert!(stdout.contains("camelCase identifier"));
    assert!(stdout.contains("constant-like token"));

    // The filtered categories never got any survivors, so no sheets.
    let mut workbook = open_workbook_auto(test.root().join("Out.xlsx"))?;
    let names = workbook.sheet_names().to_vec();
    assert!(!names.contains(&"Profile & Settings".to_string()));
    assert!(!names.contains(&"Subscription/Premium".to_string()));

    Ok(())
}

#[test]
fn test_build_summary_sheet_counts() -> Result<()> {
    let test = CliTest::with_file("translation_strings.json", SAMPLE_STRINGS)?;

    let output = test.build_command().args(["-o", "Out.xlsx"]).output()?;
    assert_eq!(output.status.code(), Some(0));

    let mut workbook = open_workbook_auto(test.root().join("Out.xlsx"))?;
    let range = workbook.worksheet_range("Summary")?;

    let cells: Vec<String> = range
        .rows()
        .flat_map(|row| row.iter().map(|v| v.to_string()))
        .collect();
    assert!(cells.contains(&"Extraction Date:".to_string()));
    assert!(cells.contains(&"2025-01-15".to_string()));
    assert!(cells.contains(&"Strings by Category:".to_string()));
    assert!(cells.contains(&"Translation Progress Tracker:".to_string()));

    Ok(())
}

#[test]
fn test_build_warns_on_unrecognized_category() -> Result<()> {
    let test = CliTest::with_file(
        "translation_strings.json",
        r#"{
            "metadata": {"extractedAt": "2025-01-15", "totalStrings": 2, "filesProcessed": 1},
            "strings": [
                {"text": "Login", "screenContext": "LoginScreen", "category": "Authentication", "notes": ""},
                {"text": "Mystery", "screenContext": "SomeScreen", "category": "Time Travel", "notes": ""}
            ]
        }"#,
    )?;

    let output = test
        .build_command()
        .args(["-o", "Out.xlsx", "-v"])
        .output()?;

    // Advisory only: the workbook is still written and the run succeeds.
    assert_eq!(output.status.code(), Some(0));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("unrecognized categories"));
    assert!(stderr.contains("\"Mystery\" (category: Time Travel, screen: SomeScreen)"));

    let mut workbook = open_workbook_auto(test.root().join("Out.xlsx"))?;
    let names = workbook.sheet_names().to_vec();
    assert!(!names.iter().any(|n| n.contains("Time Travel")));

    Ok(())
}

#[test]
fn test_build_csv_format() -> Result<()> {
    let test = CliTest::with_file("translation_strings.json", SAMPLE_STRINGS)?;

    let output = test
        .build_command()
        .args(["-o", "Out.xlsx", "--format", "csv"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("Wrote translation sheets"));

    assert!(test.root().join("Out_sheets/00_Instructions.txt").exists());
    assert!(test.root().join("Out_sheets/01_Summary.csv").exists());

    let auth = std::fs::read(test.root().join("Out_sheets/02_Authentication.csv"))?;
    assert!(auth.starts_with(b"\xef\xbb\xbf"));
    let content = String::from_utf8_lossy(&auth);
    assert!(content.contains("English Text,Screen/Context,Notes"));
    assert!(content.contains("Login,LoginScreen; SplashScreen,Button label"));

    Ok(())
}

#[test]
fn test_build_uses_config_categories() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(
        ".locbookrc.json",
        r#"{
            "categories": ["Gameplay"],
            "technicalKeywords": [],
            "project": { "appName": "PixelQuest" }
        }"#,
    )?;
    test.write_file(
        "translation_strings.json",
        r#"{
            "metadata": {"extractedAt": "2025-01-15", "totalStrings": 1, "filesProcessed": 1},
            "strings": [
                {"text": "Press Start", "screenContext": "TitleScreen", "category": "Gameplay", "notes": ""}
            ]
        }"#,
    )?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));

    // Default output name comes from the configured app name.
    let workbook_path = test.root().join("PixelQuest_Translation_Master.xlsx");
    assert!(workbook_path.exists());

    let mut workbook = open_workbook_auto(&workbook_path)?;
    assert!(workbook.sheet_names().to_vec().contains(&"Gameplay".to_string()));

    Ok(())
}

#[test]
fn test_build_missing_input_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.build_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("translation_strings.json"));

    Ok(())
}

#[test]
fn test_build_malformed_input_fails() -> Result<()> {
    let test = CliTest::with_file("translation_strings.json", "{ not json")?;

    let output = test.build_command().args(["-o", "Out.xlsx"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Error:"));
    // Fail-fast: no partial output.
    assert!(!test.root().join("Out.xlsx").exists());

    Ok(())
}
