//! Phonetic classification of word cores

use crate::types::WordCategory;

/// Number of leading characters inspected when looking for a vowel
const CLASSIFICATION_WINDOW: usize = 3;

/// Check if a character is one of `a e i o u`, ignoring case
pub fn is_vowel(ch: char) -> bool {
    matches!(ch.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Classify a word core by the position of its first vowel
///
/// Only the first three characters are considered. An empty core is
/// [`WordCategory::Unclassified`].
pub fn classify(core: &str) -> WordCategory {
    match core
        .chars()
        .take(CLASSIFICATION_WINDOW)
        .position(is_vowel)
    {
        Some(0) => WordCategory::VowelInitial,
        Some(1) => WordCategory::ConsonantVowel,
        Some(2) => WordCategory::ConsonantCluster,
        _ => WordCategory::Unclassified,
    }
}
