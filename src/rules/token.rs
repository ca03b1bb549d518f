//! Short-token heuristics.

use crate::utils::{is_all_uppercase, is_alphabetic};

/// Flags very short non-alphabetic tokens ("#1", "{}", "->").
///
/// Two-letter words like "Go" or "No" survive; anything under 3 characters
/// with a digit or symbol in it is treated as markup that leaked through.
pub fn is_short_symbolic(text: &str) -> bool {
    text.chars().count() < 3 && !is_alphabetic(text)
}

/// Flags constant-like tokens: entirely uppercase and shorter than 10
/// characters ("OK", "SAVE", "ACTIVE").
///
/// Longer all-caps strings are kept since headings are sometimes shouted.
pub fn is_constant_like(text: &str) -> bool {
    is_all_uppercase(text) && text.chars().count() < 10
}
