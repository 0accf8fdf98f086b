//! Configuration API for file translation

use crate::api::Error;

/// Default configuration constants
pub mod defaults {
    /// Minimum number of lines before parallel translation is considered
    pub const PARALLEL_THRESHOLD: usize = 10_000;
}

/// Translation configuration
///
/// Only execution is configurable; the translation rules themselves are
/// fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) threads: Option<usize>, // None = all available threads
    pub(crate) parallel_threshold: usize,
    pub(crate) force_parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threads: None,
            parallel_threshold: defaults::PARALLEL_THRESHOLD,
            force_parallel: false,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Requested worker thread count (None = all available)
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Line count at which parallel translation kicks in
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Whether parallel translation is used regardless of input size
    pub fn force_parallel(&self) -> bool {
        self.force_parallel
    }

    /// Worker threads that will actually be used
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or_else(available_threads)
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.parallel_threshold == 0 {
            return Err(Error::Configuration(
                "parallel_threshold must be greater than 0".into(),
            ));
        }

        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(Error::Configuration(
                    "threads must be greater than 0".into(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(feature = "parallel")]
fn available_threads() -> usize {
    num_cpus::get()
}

#[cfg(not(feature = "parallel"))]
fn available_threads() -> usize {
    1
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    threads: Option<usize>,
    parallel_threshold: Option<usize>,
    force_parallel: bool,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Set the line count at which parallel translation is used
    pub fn parallel_threshold(mut self, lines: usize) -> Self {
        self.parallel_threshold = Some(lines);
        self
    }

    /// Always translate in parallel when more than one thread is available
    pub fn force_parallel(mut self, force: bool) -> Self {
        self.force_parallel = force;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if self.threads.is_some() {
            config.threads = self.threads;
        }

        if let Some(lines) = self.parallel_threshold {
            config.parallel_threshold = lines;
        }

        config.force_parallel = self.force_parallel;

        config.validate()?;
        Ok(config)
    }
}
