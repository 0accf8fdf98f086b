//! Line splitting for text inputs
//!
//! `\n`, `\r\n` and a lone `\r` all end a line. A final line without a
//! terminator still counts, and a terminator at the very end does not start
//! another line.

/// Iterator over the lines of a text, without their terminators
#[derive(Debug, Clone)]
pub(crate) struct SplitLines<'a> {
    rest: &'a str,
}

/// Split `text` on `\n`, `\r\n` and lone `\r`
pub(crate) fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let Some(idx) = self.rest.find(['\r', '\n']) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let line = &self.rest[..idx];
        let terminator = if self.rest[idx..].starts_with("\r\n") { 2 } else { 1 };
        self.rest = &self.rest[idx + terminator..];
        Some(line)
    }
}
