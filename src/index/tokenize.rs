//! Tokenization and stop-word filtering.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Tokens this short or shorter are dropped.
const MIN_TOKEN_LEN: usize = 3;

/// English function words that carry no discriminative content.
pub static STOP_WORDS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
    [
        // articles and conjunctions
        "the", "a", "an", "and", "or", "but",
        // prepositions
        "in", "on", "at", "to", "for", "of", "with", "by", "from",
        // auxiliaries
        "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
        "does", "did", "will", "would", "could", "should", "may", "might", "must", "can",
        // pronouns and demonstratives
        "this", "that", "these", "those", "i", "you", "he", "she", "it", "we", "they",
        // wh-words
        "what", "which", "who", "when", "where", "why", "how",
    ]
    .into_iter()
    .collect()
});

/// Split text into normalized tokens.
///
/// Lowercases, turns every character outside `[a-z0-9]` into a separator,
/// and drops stop words and tokens of two characters or fewer. Order and
/// duplicates are preserved.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { ' ' })
        .collect();

    normalized
        .split_whitespace()
        .filter(|token| token.len() >= MIN_TOKEN_LEN && !STOP_WORDS.contains(token))
        .map(ToString::to_string)
        .collect()
}
