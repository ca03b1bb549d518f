//! Block-list matching for known technical tokens.

/// Case-insensitive substring match against the block-list.
///
/// The block-list is expected to be lowercased already (the policy normalizes
/// it at construction); the candidate is lowercased here, so "Firebase" and
/// "firebase_user_id" both hit a "firebase" token.
pub fn matches(text: &str, blocklist: &[String]) -> bool {
    let lower = text.to_lowercase();
    blocklist.iter().any(|token| lower.contains(token.as_str()))
}
