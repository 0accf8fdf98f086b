//! Output types for translation results

use std::io::{self, Write};
use std::time::Duration;

use crate::stats::TranslationStats;
use crate::types::TranslatedLine;

/// Translation output with metadata
#[derive(Debug, Clone)]
pub struct Output {
    /// Translated lines, in input order
    pub lines: Vec<TranslatedLine>,
    /// Translation metadata
    pub metadata: TranslationMetadata,
}

/// Metadata about a translation run
#[derive(Debug, Clone)]
pub struct TranslationMetadata {
    /// Total translation duration
    pub duration: Duration,
    /// Strategy used for translation
    pub strategy_used: String,
    /// Word and line counters
    pub stats: TranslationStats,
}

impl Output {
    /// Render the translation with one `\n`-terminated line per input line
    pub fn translated_text(&self) -> String {
        let capacity = self.lines.iter().map(|l| l.translated.len() + 1).sum();
        let mut text = String::with_capacity(capacity);
        for line in &self.lines {
            text.push_str(&line.translated);
            text.push('\n');
        }
        text
    }

    /// Write one translated line per input line, each followed by `\n`
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(writer, "{}", line.translated)?;
        }
        writer.flush()
    }

    /// Number of translated lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
