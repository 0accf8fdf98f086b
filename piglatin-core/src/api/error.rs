//! Error types for the API

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for translation I/O and configuration
///
/// Word and line translation never fails; every variant here comes from the
/// surrounding input/output plumbing or from an invalid configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// The input source could not be opened
    #[error("Cannot open input {}: {source}", path.display())]
    MissingSource {
        /// Path of the input that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Reading from an already opened input failed
    #[error("Failed to read input: {0}")]
    Read(#[source] io::Error),

    /// The output destination could not be created
    #[error("Cannot create output {}: {source}", path.display())]
    CreateOutput {
        /// Path of the output that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Streaming translation was asked to overwrite its own input
    #[error("Input and output are the same file: {}", path.display())]
    SameFile {
        /// Path given for both input and output
        path: PathBuf,
    },

    /// Writing a translated line failed
    #[error("Failed to write output: {0}")]
    Write(#[source] io::Error),

    /// Input was not valid UTF-8
    #[error("Invalid UTF-8 encoding: {0}")]
    InvalidEncoding(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The worker pool for parallel translation could not be started
    #[error("Parallel execution failed: {0}")]
    Parallel(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
