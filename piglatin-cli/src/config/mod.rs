//! Configuration module

use anyhow::{Context, Result};
use piglatin_core::api::defaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Output file used when neither `--output` nor a config file names one
pub const DEFAULT_OUTPUT_PATH: &str = "output.txt";

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Output path when `--output` is omitted
    pub default_path: PathBuf,

    /// Default output format ("text" or "json")
    pub default_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            default_format: "text".to_string(),
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Line count at which translation switches to parallel
    pub parallel_threshold: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: defaults::PARALLEL_THRESHOLD,
            worker_threads: 0,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Worker thread count, with 0 meaning "let the translator decide"
    pub fn worker_threads(&self) -> Option<usize> {
        match self.performance.worker_threads {
            0 => None,
            n => Some(n),
        }
    }
}
