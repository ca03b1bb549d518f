use anyhow::{Ok, Result};
use calamine::{Reader, open_workbook_auto};

use crate::{CliTest, stderr_of, stdout_of};

#[test]
fn test_notifications_generates_workbook() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.notifications_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Wrote notification documentation: Notifications_Documentation.xlsx"));
    assert!(stdout.contains("notification types"));

    let path = test.root().join("Notifications_Documentation.xlsx");
    let mut workbook = open_workbook_auto(&path)?;
    let names = workbook.sheet_names().to_vec();
    assert_eq!(names, vec!["Summary & Statistics", "All Notifications"]);

    Ok(())
}

#[test]
fn test_notifications_catalog_rows() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .notifications_command()
        .args(["-o", "Catalog.xlsx"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let mut workbook = open_workbook_auto(test.root().join("Catalog.xlsx"))?;
    let range = workbook.worksheet_range("All Notifications")?;

    // Header plus a substantial catalog.
    assert!(range.height() > 30);
    assert_eq!(
        range.get_value((0, 3)).map(|v| v.to_string()),
        Some("Notification Type".to_string())
    );
    assert_eq!(
        range.get_value((1, 0)).map(|v| v.to_string()),
        Some("1".to_string())
    );

    let statuses: Vec<String> = range
        .rows()
        .skip(1)
        .filter_map(|row| row.get(1).map(|v| v.to_string()))
        .collect();
    assert!(statuses.iter().any(|s| s == "ACTIVE"));
    assert!(statuses.iter().any(|s| s == "PENDING"));

    Ok(())
}

#[test]
fn test_notifications_summary_counts() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .notifications_command()
        .args(["-o", "Catalog.xlsx"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let mut workbook = open_workbook_auto(test.root().join("Catalog.xlsx"))?;
    let range = workbook.worksheet_range("Summary & Statistics")?;

    let cells: Vec<String> = range
        .rows()
        .flat_map(|row| row.iter().map(|v| v.to_string()))
        .collect();
    assert!(cells.contains(&"Total Notifications:".to_string()));
    assert!(cells.contains(&"Active (Implemented):".to_string()));
    assert!(cells.contains(&"Pending (Not Triggered):".to_string()));

    Ok(())
}
