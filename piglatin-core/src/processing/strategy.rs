//! Core trait and types for processing strategies

use crate::api::Result;
use crate::stats::TranslationStats;
use crate::types::TranslatedLine;

/// Lines translated by a strategy together with their counters
#[derive(Debug, Clone, Default)]
pub struct TranslatedBatch {
    /// Translated lines, in input order
    pub lines: Vec<TranslatedLine>,
    /// Counters accumulated over all lines
    pub stats: TranslationStats,
}

/// Trait for different line-processing strategies
pub trait ProcessingStrategy: Send + Sync {
    /// Translate `lines`, numbering them from 1 in the order given
    fn translate(&self, lines: &[&str]) -> Result<TranslatedBatch>;

    /// Strategy name for logging and metadata
    fn name(&self) -> &'static str;
}
