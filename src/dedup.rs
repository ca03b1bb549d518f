//! Duplicate merging for extracted strings.
//!
//! The same string frequently appears on several screens ("Save", "Cancel",
//! error copy). Rather than hand translators the same text repeatedly, all
//! occurrences are merged into a single record whose screen context lists
//! every location.

use std::collections::HashMap;

use crate::strings::StringRecord;

/// Separator between merged screen contexts.
pub const CONTEXT_SEPARATOR: &str = "; ";

/// Merge records that share the same normalized text and category.
///
/// The key is `(text.to_lowercase().trim(), category)`, so "Login" and
/// "login" fold together while the same text in two different categories
/// stays separate. First-seen order is preserved, and the first record wins
/// for `text` and `notes`. Later occurrences only contribute their screen
/// context, and only when it is not already contained in the combined
/// context.
///
/// The merge is idempotent: running it over its own output changes nothing.
pub fn merge_duplicates(records: Vec<StringRecord>) -> Vec<StringRecord> {
    let mut seen: HashMap<(String, String), usize> = HashMap::new();
    let mut merged: Vec<StringRecord> = Vec::new();

    for record in records {
        let key = (
            record.text.to_lowercase().trim().to_string(),
            record.category.clone(),
        );
        match seen.get(&key) {
            None => {
                seen.insert(key, merged.len());
                merged.push(record);
            }
            Some(&index) => {
                let existing = &mut merged[index];
                if !existing
                    .screen_context
                    .contains(record.screen_context.as_str())
                {
                    existing.screen_context.push_str(CONTEXT_SEPARATOR);
                    existing.screen_context.push_str(&record.screen_context);
                }
            }
        }
    }

    merged
}
