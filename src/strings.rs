//! Input model for extracted UI strings.
//!
//! The string extraction pass (run against the app source tree) produces a
//! JSON dump with camelCase field names. This module owns its serde model and
//! the fail-fast loader: a dump that cannot be read or parsed aborts the whole
//! run before any output is produced.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Extraction metadata carried alongside the raw strings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// ISO timestamp of the extraction run (e.g. "2025-01-15T09:30:00Z").
    pub extracted_at: String,
    pub total_strings: usize,
    pub files_processed: usize,
}

impl Metadata {
    /// The date portion (YYYY-MM-DD) of the extraction timestamp.
    pub fn extraction_date(&self) -> &str {
        self.extracted_at.get(..10).unwrap_or(&self.extracted_at)
    }
}

/// One extracted UI string with its source context.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringRecord {
    pub text: String,
    /// Where the string appears in the app. After deduplication this may list
    /// several locations joined with "; ".
    #[serde(default)]
    pub screen_context: String,
    pub category: String,
    #[serde(default)]
    pub notes: String,
}

/// The extracted-strings dump as written by the extraction pass.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StringsFile {
    pub metadata: Metadata,
    pub strings: Vec<StringRecord>,
}

pub fn load_strings_file(path: &Path) -> Result<StringsFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read strings file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse strings file: {}", path.display()))
}
