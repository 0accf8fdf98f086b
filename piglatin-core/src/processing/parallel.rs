//! Parallel processing strategy for large inputs

use super::strategy::{ProcessingStrategy, TranslatedBatch};
use crate::api::Result;

#[cfg(feature = "parallel")]
use crate::api::Error;
#[cfg(feature = "parallel")]
use crate::line::translate_line_with_stats;
#[cfg(feature = "parallel")]
use crate::stats::TranslationStats;
#[cfg(feature = "parallel")]
use crate::types::TranslatedLine;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Parallel processing strategy using Rayon
#[derive(Debug, Clone, Copy)]
pub struct ParallelStrategy {
    thread_count: usize,
}

impl ParallelStrategy {
    /// Create a new parallel strategy running on `thread_count` workers
    pub fn new(thread_count: usize) -> Self {
        Self {
            thread_count: thread_count.max(1),
        }
    }

    /// Number of worker threads
    pub fn thread_count(&self) -> usize {
        self.thread_count
    }

    #[cfg(feature = "parallel")]
    fn translate_parallel(&self, lines: &[&str]) -> Result<TranslatedBatch> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.thread_count)
            .build()
            .map_err(|e| Error::Parallel(e.to_string()))?;

        // Indexed collect keeps input order regardless of scheduling
        let results: Vec<(TranslatedLine, TranslationStats)> = pool.install(|| {
            lines
                .par_iter()
                .enumerate()
                .map(|(idx, line)| {
                    let mut stats = TranslationStats::default();
                    let translated = translate_line_with_stats(line, &mut stats);
                    (TranslatedLine::new(idx + 1, *line, translated), stats)
                })
                .collect()
        });

        let mut stats = TranslationStats::default();
        let lines = results
            .into_iter()
            .map(|(line, line_stats)| {
                stats.merge(&line_stats);
                line
            })
            .collect();

        Ok(TranslatedBatch { lines, stats })
    }

    #[cfg(not(feature = "parallel"))]
    fn translate_parallel(&self, lines: &[&str]) -> Result<TranslatedBatch> {
        // Fallback to sequential if parallel feature is disabled
        super::SequentialStrategy::new().translate(lines)
    }
}

impl ProcessingStrategy for ParallelStrategy {
    fn translate(&self, lines: &[&str]) -> Result<TranslatedBatch> {
        self.translate_parallel(lines)
    }

    fn name(&self) -> &'static str {
        "Parallel"
    }
}
