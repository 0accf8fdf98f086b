//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use piglatin_core::{TranslatedLine, TranslationStats};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs all lines and statistics as one document
pub struct JsonFormatter<W: Write> {
    writer: W,
    lines: Vec<LineData>,
}

/// Data structure for a single line in JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineData {
    /// 1-based line number
    pub number: usize,
    /// The original line
    pub original: String,
    /// The translated line
    pub translated: String,
}

/// Complete JSON document
#[derive(Debug, Serialize)]
struct JsonDocument<'a> {
    lines: &'a [LineData],
    stats: &'a TranslationStats,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, line: &TranslatedLine) -> Result<()> {
        self.lines.push(LineData {
            number: line.number,
            original: line.original.clone(),
            translated: line.translated.clone(),
        });
        Ok(())
    }

    fn finish(&mut self, stats: &TranslationStats) -> Result<()> {
        let document = JsonDocument {
            lines: &self.lines,
            stats,
        };
        serde_json::to_writer_pretty(&mut self.writer, &document)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
