//! Affix splitting around the alphabetic core of a token
//!
//! Leading and trailing non-alphabetic runs are peeled off so that only the
//! word itself is rearranged; the runs are put back verbatim afterwards.
//! Non-alphabetic characters *inside* the core (the apostrophe in "don't")
//! are left where they are.

/// A token decomposed into `prefix`, `core` and `suffix`
///
/// All three parts borrow from the original token and
/// `prefix + core + suffix` always reconstructs it exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffixedWord<'a> {
    /// Leading non-alphabetic run (possibly empty)
    pub prefix: &'a str,
    /// Span from the first to the last alphabetic character (possibly empty)
    pub core: &'a str,
    /// Trailing non-alphabetic run (possibly empty)
    pub suffix: &'a str,
}

impl<'a> AffixedWord<'a> {
    /// Whether the token contained any alphabetic character at all
    pub fn has_core(&self) -> bool {
        !self.core.is_empty()
    }

    /// Rebuild the token around a replacement core
    pub fn reattach(&self, core: &str) -> String {
        let mut word = String::with_capacity(self.prefix.len() + core.len() + self.suffix.len());
        word.push_str(self.prefix);
        word.push_str(core);
        word.push_str(self.suffix);
        word
    }
}

/// Split a whitespace-free token into its affixes and core
///
/// A token without alphabetic characters ends up entirely in `prefix`,
/// with empty `core` and `suffix`.
pub fn split_affixes(token: &str) -> AffixedWord<'_> {
    let Some(start) = token.find(char::is_alphabetic) else {
        return AffixedWord {
            prefix: token,
            core: "",
            suffix: "",
        };
    };

    let end = token
        .char_indices()
        .rev()
        .find(|&(_, ch)| ch.is_alphabetic())
        .map_or(token.len(), |(idx, ch)| idx + ch.len_utf8());

    AffixedWord {
        prefix: &token[..start],
        core: &token[start..end],
        suffix: &token[end..],
    }
}
