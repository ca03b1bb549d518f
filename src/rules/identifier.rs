//! Identifier-shaped string heuristics.

/// Flags camelCase identifiers: longer than 3 characters, an uppercase letter
/// somewhere after the first character, and no whitespace anywhere.
///
/// A capitalized sentence ("Hello World") survives because it contains
/// whitespace, and a single capitalized word ("Login") survives because no
/// uppercase appears after the first character. "PremiumUser" is flagged.
pub fn is_camel_case(text: &str) -> bool {
    text.chars().count() > 3
        && text.chars().skip(1).any(|c| c.is_uppercase())
        && !text.chars().any(|c| c.is_whitespace())
}

/// Flags snake_case identifiers: more than one underscore.
///
/// A single underscore is tolerated since it shows up in legitimate copy
/// (e.g. a literal "first_name" placeholder mentioned in a help text).
pub fn is_snake_case(text: &str) -> bool {
    text.matches('_').count() > 1
}
