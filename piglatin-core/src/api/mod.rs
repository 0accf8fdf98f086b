//! Public API for translating whole texts and files
//!
//! This module wraps the pure word and line functions with input sources,
//! execution configuration and output handling for CLI use.

mod config;
mod error;
mod input;
mod lines;
mod output;
mod translator;

#[cfg(test)]
mod tests;

pub use config::{defaults, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use input::Input;
pub use output::{Output, TranslationMetadata};
pub use translator::Translator;
