//! Translation statistics

use crate::types::WordCategory;

/// What happened to a single token during translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordOutcome {
    /// The token had an alphabetic core of this category
    Classified(WordCategory),
    /// The token had no alphabetic characters and passed through unchanged
    PunctuationOnly,
}

/// Counters collected while translating lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TranslationStats {
    /// Number of lines translated
    pub lines: usize,
    /// Number of whitespace-delimited tokens seen
    pub words: usize,
    /// Words starting with a vowel
    pub vowel_initial: usize,
    /// Words with a single leading consonant
    pub consonant_vowel: usize,
    /// Words with two leading consonants
    pub consonant_cluster: usize,
    /// Words left untranslated for lack of an early vowel
    pub unclassified: usize,
    /// Tokens without any alphabetic character
    pub punctuation_only: usize,
}

impl TranslationStats {
    /// Record the outcome of one token
    pub fn record(&mut self, outcome: WordOutcome) {
        self.words += 1;
        match outcome {
            WordOutcome::Classified(WordCategory::VowelInitial) => self.vowel_initial += 1,
            WordOutcome::Classified(WordCategory::ConsonantVowel) => self.consonant_vowel += 1,
            WordOutcome::Classified(WordCategory::ConsonantCluster) => {
                self.consonant_cluster += 1
            }
            WordOutcome::Classified(WordCategory::Unclassified) => self.unclassified += 1,
            WordOutcome::PunctuationOnly => self.punctuation_only += 1,
        }
    }

    /// Add another set of counters into this one
    pub fn merge(&mut self, other: &TranslationStats) {
        self.lines += other.lines;
        self.words += other.words;
        self.vowel_initial += other.vowel_initial;
        self.consonant_vowel += other.consonant_vowel;
        self.consonant_cluster += other.consonant_cluster;
        self.unclassified += other.unclassified;
        self.punctuation_only += other.punctuation_only;
    }

    /// Number of words whose core was actually rearranged
    pub fn translated_words(&self) -> usize {
        self.vowel_initial + self.consonant_vowel + self.consonant_cluster
    }

    /// Count for a single category
    pub fn count_for(&self, category: WordCategory) -> usize {
        match category {
            WordCategory::VowelInitial => self.vowel_initial,
            WordCategory::ConsonantVowel => self.consonant_vowel,
            WordCategory::ConsonantCluster => self.consonant_cluster,
            WordCategory::Unclassified => self.unclassified,
        }
    }
}
