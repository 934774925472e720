//! Word tokenization shared by training and scoring

use std::collections::BTreeSet;

/// Split text into the set of distinct lowercase words it contains.
///
/// A word is a maximal run of ASCII letters, digits or underscores;
/// every other character separates words. Repeated words collapse to one
/// entry, so callers count word presence rather than occurrences.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !is_word_char(c))
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
