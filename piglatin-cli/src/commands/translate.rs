//! Translate command implementation

use anyhow::Context;
use clap::{Parser, ValueEnum};
use piglatin_core::{Config, Input, TranslationStats, Translator, WordCategory};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::{core_error, CliError, CliResult};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Translate a plain-text file into Pig Latin
#[derive(Debug, Parser)]
#[command(name = "piglatin", version, about, long_about = None)]
pub struct TranslateArgs {
    /// Input text file to translate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Output file (default: output.txt)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "PIGLATIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Force parallel translation even for small files
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (default: all cores)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One translated line per input line
    Text,
    /// JSON document with original and translated lines plus statistics
    Json,
}

impl TranslateArgs {
    /// Execute the translate command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::info!("Starting translation");
        log::debug!("Arguments: {:?}", self);

        let cli_config = self.load_config()?;
        let output_path = self.output_path(&cli_config);
        let format = self.output_format(&cli_config)?;
        let translator = Translator::with_config(self.translator_config(&cli_config)?);

        log::info!(
            "Translating {} -> {} ({:?})",
            self.input.display(),
            output_path.display(),
            format
        );

        // The input is fully read before the output file is created
        let output = translator
            .translate(Input::from_file(&self.input))
            .map_err(core_error)?;

        log::debug!(
            "Translated {} lines with {} strategy in {:?}",
            output.line_count(),
            output.metadata.strategy_used,
            output.metadata.duration
        );

        let file = File::create(&output_path)
            .with_context(|| CliError::OutputError(output_path.display().to_string()))?;
        let writer = BufWriter::new(file);
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_lines(output.line_count() as u64);

        for line in &output.lines {
            formatter
                .format_line(line)
                .with_context(|| CliError::OutputError(output_path.display().to_string()))?;
            progress.line_completed();
        }

        let stats = &output.metadata.stats;
        formatter
            .finish(stats)
            .with_context(|| CliError::OutputError(output_path.display().to_string()))?;
        progress.finish(&output_path.display().to_string());

        log::info!(
            "Wrote {} lines ({} words, {} translated, {} unclassified, {} punctuation-only)",
            stats.lines,
            stats.words,
            stats.translated_words(),
            stats.unclassified,
            stats.punctuation_only
        );
        log::debug!("Words by category: {}", category_summary(stats));

        Ok(())
    }

    /// Load the configuration file, or defaults when none is given
    fn load_config(&self) -> CliResult<CliConfig> {
        match &self.config {
            Some(path) => {
                log::debug!("Using config file: {}", path.display());
                CliConfig::from_file(path)
                    .with_context(|| CliError::ConfigError(path.display().to_string()))
            }
            None => Ok(CliConfig::default()),
        }
    }

    /// Output path from `--output`, the config file, or `output.txt`
    pub fn output_path(&self, config: &CliConfig) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| config.output.default_path.clone())
    }

    /// Output format from `--format` or the config file
    pub fn output_format(&self, config: &CliConfig) -> CliResult<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }

        OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
            anyhow::Error::new(CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.output.default_format
            )))
        })
    }

    /// Translator configuration from flags, falling back to the config file
    pub fn translator_config(&self, config: &CliConfig) -> CliResult<Config> {
        let threads = self.threads.or_else(|| config.worker_threads());

        Config::builder()
            .threads(threads)
            .parallel_threshold(config.performance.parallel_threshold)
            .force_parallel(self.parallel)
            .build()
            .map_err(core_error)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when running inside tests
        if let Err(e) =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
        {
            log::debug!("Logger already initialized: {e}");
        }
    }
}

/// Per-category word counts, e.g. `vowel-initial=2, consonant-vowel=5, ...`
fn category_summary(stats: &TranslationStats) -> String {
    WordCategory::ALL
        .iter()
        .map(|category| format!("{category}={}", stats.count_for(*category)))
        .collect::<Vec<_>>()
        .join(", ")
}
