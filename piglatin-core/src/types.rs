//! Core types for Pig Latin translation

use core::fmt;

/// Phonetic shape of a word core, decided by where its first vowel sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum WordCategory {
    /// First character is a vowel ("apple")
    VowelInitial,
    /// One consonant before the first vowel ("hello")
    ConsonantVowel,
    /// Two consonants before the first vowel ("three")
    ConsonantCluster,
    /// No vowel within the first three characters ("nth", "shh")
    Unclassified,
}

impl WordCategory {
    /// All categories, in classification order
    pub const ALL: [WordCategory; 4] = [
        WordCategory::VowelInitial,
        WordCategory::ConsonantVowel,
        WordCategory::ConsonantCluster,
        WordCategory::Unclassified,
    ];

    /// Stable lowercase name used in logs and serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            WordCategory::VowelInitial => "vowel-initial",
            WordCategory::ConsonantVowel => "consonant-vowel",
            WordCategory::ConsonantCluster => "consonant-cluster",
            WordCategory::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for WordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single input line paired with its translation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TranslatedLine {
    /// 1-based line number in the input
    pub number: usize,
    /// The line as read, without its line terminator
    pub original: String,
    /// The Pig Latin rendering of the line
    pub translated: String,
}

impl TranslatedLine {
    /// Create a new translated line
    pub fn new(number: usize, original: impl Into<String>, translated: impl Into<String>) -> Self {
        Self {
            number,
            original: original.into(),
            translated: translated.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display_matches_as_str() {
        for category in WordCategory::ALL {
            assert_eq!(category.to_string(), category.as_str());
        }
        assert_eq!(WordCategory::ConsonantCluster.to_string(), "consonant-cluster");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_category_serializes_kebab_case() {
        let json = serde_json::to_string(&WordCategory::VowelInitial).unwrap();
        assert_eq!(json, "\"vowel-initial\"");
    }
}
