//! Line-level translation

use crate::stats::TranslationStats;
use crate::transform::translate_token;

/// Placed between translated words when a line is reassembled
pub const SEPARATOR: char = ' ';

/// Translate every whitespace-delimited token of a line
///
/// Tokens are rejoined with a single space, so runs of whitespace and
/// leading or trailing whitespace are not preserved. An empty or
/// whitespace-only line translates to an empty string.
///
/// ```
/// use piglatin_core::translate_line;
///
/// assert_eq!(translate_line("Hello, world!"), "Ellohay, orldway!");
/// assert_eq!(translate_line(""), "");
/// ```
pub fn translate_line(line: &str) -> String {
    let mut stats = TranslationStats::default();
    translate_line_with_stats(line, &mut stats)
}

/// Translate a line while recording per-word outcomes into `stats`
pub fn translate_line_with_stats(line: &str, stats: &mut TranslationStats) -> String {
    stats.lines += 1;

    let mut translated = String::with_capacity(line.len() + line.len() / 2);
    for token in line.split_whitespace() {
        if !translated.is_empty() {
            translated.push(SEPARATOR);
        }
        let (word, outcome) = translate_token(token);
        translated.push_str(&word);
        stats.record(outcome);
    }

    translated
}
