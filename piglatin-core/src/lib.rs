//! Pig Latin translation preserving punctuation and letter casing
//!
//! Each whitespace-delimited token goes through the same pipeline:
//!
//! 1. **Affix splitting**: leading and trailing non-alphabetic characters are
//!    set aside ([`split_affixes`]).
//! 2. **Classification**: the core is assigned a [`WordCategory`] from the
//!    position of its first vowel ([`classify`]).
//! 3. **Transformation**: the matching rule moves leading consonants and
//!    appends a suffix ([`transform_core`]).
//! 4. **Capitalization transfer**: the original casing is copied back onto
//!    the result position by position ([`transfer_capitalization`]).
//!
//! Word and line translation are total functions over strings. All I/O
//! lives in the [`api`] module.
//!
//! # Architecture
//!
//! - **Word layer**: pure per-token functions (`affix`, `classifier`,
//!   `capitalization`, `transform`)
//! - **Line layer**: token splitting and reassembly (`line`)
//! - **Processing layer**: sequential and parallel line strategies
//! - **API layer**: inputs, configuration, output and file translation
//!
//! # Example
//!
//! ```rust
//! use piglatin_core::{translate_line, Input, Translator};
//!
//! assert_eq!(translate_line("Hello, world!"), "Ellohay, orldway!");
//!
//! let output = Translator::new()
//!     .translate(Input::from_text("The quick fox\neat my shorts"))
//!     .unwrap();
//! assert_eq!(output.translated_text(), "Ethay uickqay oxfay\neatway my ortsshay\n");
//! ```

pub mod affix;
pub mod api;
pub mod capitalization;
pub mod classifier;
pub mod line;
pub mod processing;
pub mod stats;
pub mod transform;
pub mod types;

pub use affix::{split_affixes, AffixedWord};
pub use api::{Config, ConfigBuilder, Error, Input, Output, TranslationMetadata, Translator};
pub use capitalization::transfer_capitalization;
pub use classifier::{classify, is_vowel};
pub use line::{translate_line, translate_line_with_stats, SEPARATOR};
pub use stats::{TranslationStats, WordOutcome};
pub use transform::{transform_core, translate_word};
pub use types::{TranslatedLine, WordCategory};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_stages_compose() {
        let word = split_affixes("\"Plates,\"");
        let category = classify(word.core);
        let core = transform_core(word.core, category);

        assert_eq!(category, WordCategory::ConsonantCluster);
        assert_eq!(word.reattach(&core), translate_word("\"Plates,\""));
        assert_eq!(translate_word("\"Plates,\""), "\"Atesplay,\"");
    }

    #[test]
    fn test_root_exports() {
        let _config: Config = Config::default();
        let _stats: TranslationStats = TranslationStats::default();
        let _line = TranslatedLine::new(1, "a", "away");
        assert_eq!(SEPARATOR, ' ');
    }
}
