//! Sequential processing strategy

use super::strategy::{ProcessingStrategy, TranslatedBatch};
use crate::api::Result;
use crate::line::translate_line_with_stats;
use crate::stats::TranslationStats;
use crate::types::TranslatedLine;

/// Translates lines one after another on the calling thread
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialStrategy;

impl SequentialStrategy {
    /// Create a new sequential strategy
    pub fn new() -> Self {
        Self
    }
}

impl ProcessingStrategy for SequentialStrategy {
    fn translate(&self, lines: &[&str]) -> Result<TranslatedBatch> {
        let mut stats = TranslationStats::default();
        let translated = lines
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                TranslatedLine::new(idx + 1, *line, translate_line_with_stats(line, &mut stats))
            })
            .collect();

        Ok(TranslatedBatch {
            lines: translated,
            stats,
        })
    }

    fn name(&self) -> &'static str {
        "Sequential"
    }
}
