//! Pig Latin CLI library
//!
//! This library provides the command-line interface for translating
//! plain-text files into Pig Latin.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
