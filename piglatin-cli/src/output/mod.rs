//! Output formatting module

use anyhow::Result;
use piglatin_core::{TranslatedLine, TranslationStats};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single translated line
    fn format_line(&mut self, line: &TranslatedLine) -> Result<()>;

    /// Finalize output (e.g., write the collected JSON document)
    fn finish(&mut self, stats: &TranslationStats) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
