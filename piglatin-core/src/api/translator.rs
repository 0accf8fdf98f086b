//! File translator: applies line translation to whole inputs

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use crate::api::lines::split_lines;
use crate::api::{Config, Error, Input, Output, Result, TranslationMetadata};
use crate::line::translate_line_with_stats;
use crate::processing::select_strategy;
use crate::stats::TranslationStats;

/// Translates text sources line by line
#[derive(Debug, Clone, Default)]
pub struct Translator {
    config: Config,
}

impl Translator {
    /// Create a translator with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a translator with custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read the whole input and translate every line
    pub fn translate(&self, input: Input) -> Result<Output> {
        let start = Instant::now();

        let text = input.into_text()?;
        let lines: Vec<&str> = split_lines(&text).collect();

        let strategy = select_strategy(lines.len(), &self.config);
        let batch = strategy.translate(&lines)?;

        Ok(Output {
            lines: batch.lines,
            metadata: TranslationMetadata {
                duration: start.elapsed(),
                strategy_used: strategy.name().to_string(),
                stats: batch.stats,
            },
        })
    }

    /// Translate a reader line by line, writing each result as it is produced
    ///
    /// Lines are written in input order, each followed by `\n`. Line breaks
    /// are recognised the same way as in [`Translator::translate`].
    pub fn translate_stream<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> Result<TranslationStats> {
        let mut stats = TranslationStats::default();
        let mut chunk = Vec::new();

        // Chunks end at `\n`, so a `\r\n` pair or a UTF-8 sequence is never split
        loop {
            chunk.clear();
            if reader.read_until(b'\n', &mut chunk).map_err(Error::Read)? == 0 {
                break;
            }

            let text =
                std::str::from_utf8(&chunk).map_err(|e| Error::InvalidEncoding(e.to_string()))?;
            for line in split_lines(text) {
                let translated = translate_line_with_stats(line, &mut stats);
                writeln!(writer, "{translated}").map_err(Error::Write)?;
            }
        }

        writer.flush().map_err(Error::Write)?;
        Ok(stats)
    }

    /// Translate the file at `input` into a new file at `output`
    ///
    /// The input is read completely before the output is created, so a
    /// missing input leaves no output file behind and `input` may equal
    /// `output`.
    pub fn translate_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<TranslationStats> {
        let translated = self.translate(Input::from_file(input.as_ref()))?;

        let output = output.as_ref();
        let file = File::create(output).map_err(|source| Error::CreateOutput {
            path: output.to_path_buf(),
            source,
        })?;
        translated
            .write_to(BufWriter::new(file))
            .map_err(Error::Write)?;

        Ok(translated.metadata.stats)
    }

    /// Translate the file at `input` line by line without loading it into memory
    ///
    /// The input is opened before the output is created. Unlike
    /// [`Translator::translate_file`], `input` and `output` must name
    /// different files; naming the same file is rejected with
    /// [`Error::SameFile`] before anything is truncated.
    pub fn translate_file_streaming(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<TranslationStats> {
        let input = input.as_ref();
        let source = File::open(input).map_err(|source| Error::MissingSource {
            path: input.to_path_buf(),
            source,
        })?;

        let output = output.as_ref();
        if is_same_file(input, output) {
            return Err(Error::SameFile {
                path: output.to_path_buf(),
            });
        }

        let sink = File::create(output).map_err(|source| Error::CreateOutput {
            path: output.to_path_buf(),
            source,
        })?;

        self.translate_stream(BufReader::new(source), BufWriter::new(sink))
    }
}

/// Whether two paths resolve to the same existing file
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
