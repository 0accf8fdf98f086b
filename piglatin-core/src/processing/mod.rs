//! Line-processing strategies
//!
//! Lines are independent of each other, so a file can be translated either
//! on the calling thread or spread across a worker pool. Both strategies
//! return lines in input order.
//!
//! - **Sequential**: for ordinary inputs where a pool is not worth starting
//! - **Parallel**: for inputs of at least `Config::parallel_threshold` lines
//!
//! # Example
//!
//! ```rust
//! use piglatin_core::processing::select_strategy;
//! use piglatin_core::Config;
//!
//! let lines = ["The quick fox", "jumps over"];
//! let strategy = select_strategy(lines.len(), &Config::default());
//! let batch = strategy.translate(&lines).unwrap();
//!
//! assert_eq!(strategy.name(), "Sequential");
//! assert_eq!(batch.lines[0].translated, "Ethay uickqay oxfay");
//! ```

pub mod parallel;
pub mod selector;
pub mod sequential;
pub mod strategy;

pub use parallel::ParallelStrategy;
pub use selector::select_strategy;
pub use sequential::SequentialStrategy;
pub use strategy::{ProcessingStrategy, TranslatedBatch};
