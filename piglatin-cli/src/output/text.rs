//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use piglatin_core::{TranslatedLine, TranslationStats};
use std::io::Write;

/// Plain text formatter - outputs one translated line per input line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_line(&mut self, line: &TranslatedLine) -> Result<()> {
        writeln!(self.writer, "{}", line.translated)?;
        Ok(())
    }

    fn finish(&mut self, _stats: &TranslationStats) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_line_per_input_line() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter
                .format_line(&TranslatedLine::new(1, "Hello, world!", "Ellohay, orldway!"))
                .unwrap();
            formatter.format_line(&TranslatedLine::new(2, "", "")).unwrap();
            formatter.finish(&TranslationStats::default()).unwrap();
        }

        assert_eq!(String::from_utf8(buffer).unwrap(), "Ellohay, orldway!\n\n");
    }
}
