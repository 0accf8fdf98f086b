//! Strategy selection logic

use super::parallel::ParallelStrategy;
use super::sequential::SequentialStrategy;
use super::strategy::ProcessingStrategy;
use crate::api::Config;

/// Select the processing strategy for an input of `line_count` lines
///
/// Parallel translation needs more than one worker thread and either a
/// forced request or at least `parallel_threshold` lines.
pub fn select_strategy(line_count: usize, config: &Config) -> Box<dyn ProcessingStrategy> {
    let threads = config.effective_threads();
    let wants_parallel = config.force_parallel() || line_count >= config.parallel_threshold();

    if threads > 1 && wants_parallel {
        Box::new(ParallelStrategy::new(threads))
    } else {
        Box::new(SequentialStrategy::new())
    }
}
