//! Pig Latin rules applied to classified word cores

use crate::affix::split_affixes;
use crate::capitalization::transfer_capitalization;
use crate::classifier::classify;
use crate::stats::WordOutcome;
use crate::types::WordCategory;

/// Appended to words that start with a vowel
const VOWEL_SUFFIX: &str = "way";

/// Appended after the relocated leading consonants
const CONSONANT_SUFFIX: &str = "ay";

/// Apply the rule for `category` to `core` and restore its casing
///
/// Unclassified cores come back unchanged.
pub fn transform_core(core: &str, category: WordCategory) -> String {
    let rearranged = match category {
        WordCategory::VowelInitial => format!("{core}{VOWEL_SUFFIX}"),
        WordCategory::ConsonantVowel => move_leading(core, 1),
        WordCategory::ConsonantCluster => move_leading(core, 2),
        WordCategory::Unclassified => return core.to_string(),
    };

    transfer_capitalization(core, &rearranged)
}

/// Move the first `count` characters to the end and append the consonant suffix
fn move_leading(core: &str, count: usize) -> String {
    let split = core
        .char_indices()
        .nth(count)
        .map_or(core.len(), |(idx, _)| idx);
    let (head, tail) = core.split_at(split);

    let mut word = String::with_capacity(core.len() + CONSONANT_SUFFIX.len());
    word.push_str(tail);
    word.push_str(head);
    word.push_str(CONSONANT_SUFFIX);
    word
}

/// Translate a single whitespace-free token into Pig Latin
///
/// Leading and trailing punctuation is kept in place, and tokens without any
/// alphabetic character are returned unchanged.
///
/// ```
/// use piglatin_core::translate_word;
///
/// assert_eq!(translate_word("Hello,"), "Ellohay,");
/// assert_eq!(translate_word("apple"), "appleway");
/// assert_eq!(translate_word("..."), "...");
/// ```
pub fn translate_word(token: &str) -> String {
    translate_token(token).0
}

/// Translate a token and report how it was handled
pub(crate) fn translate_token(token: &str) -> (String, WordOutcome) {
    let word = split_affixes(token);
    if !word.has_core() {
        return (token.to_string(), WordOutcome::PunctuationOnly);
    }

    let category = classify(word.core);
    let translated = word.reattach(&transform_core(word.core, category));
    (translated, WordOutcome::Classified(category))
}
