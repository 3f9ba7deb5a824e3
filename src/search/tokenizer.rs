//! Query tokenizer.

/// Split a raw query into lowercase terms.
///
/// Splits on runs of whitespace and drops empty fragments, so blank input
/// yields no terms.
#[must_use]
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
