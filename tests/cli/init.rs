use anyhow::{Ok, Result};

use crate::{CliTest, stderr_of, stdout_of};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("Created .locbookrc.json"));

    let content = test.read_file(".locbookrc.json")?;
    assert!(content.contains("categories"));
    assert!(content.contains("Authentication"));
    assert!(content.contains("technicalKeywords"));
    assert!(content.contains("appName"));

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".locbookrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("already exists"));
    assert_eq!(test.read_file(".locbookrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_loadable() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0));

    // A build right after init should pick the file up without complaint.
    test.write_file(
        "translation_strings.json",
        r#"{
            "metadata": {"extractedAt": "2025-01-15", "totalStrings": 1, "filesProcessed": 1},
            "strings": [
                {"text": "Login", "screenContext": "LoginScreen", "category": "Authentication", "notes": ""}
            ]
        }"#,
    )?;

    let output = test.build_command().args(["-o", "Out.xlsx"]).output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));

    Ok(())
}
