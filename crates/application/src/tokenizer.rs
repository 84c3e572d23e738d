//! Text tokenization utilities
//!
//! Normalizes user text into lowercase word tokens for exact-membership
//! matching. Substring-based passes (themes, risk, crisis) scan the raw
//! lowercased text instead and do not go through here.

/// Split text into lowercase word tokens
///
/// Splits on every run of non-alphanumeric characters (underscore counts
/// as a word character) and discards empty tokens. Total and pure: any
/// input yields a token list, possibly empty.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}
