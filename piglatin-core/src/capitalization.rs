//! Positional casing transfer between a source word and its rearrangement

/// Copy the casing of `from` onto `to`, position by position
///
/// For each position shared by both words the result character is
/// uppercased when the source character is uppercase, lowercased when it is
/// lowercase, and left alone otherwise. Characters of `to` beyond the length
/// of `from` are lowercased.
///
/// Positions count Unicode scalar values, not bytes.
///
/// ```
/// use piglatin_core::transfer_capitalization;
///
/// assert_eq!(transfer_capitalization("Hello", "ellohay"), "Ellohay");
/// assert_eq!(transfer_capitalization("HELLO", "ellohay"), "ELLOHay");
/// ```
pub fn transfer_capitalization(from: &str, to: &str) -> String {
    let mut result = String::with_capacity(to.len());
    let mut source = from.chars();

    for ch in to.chars() {
        match source.next() {
            Some(src) if src.is_uppercase() => result.extend(ch.to_uppercase()),
            Some(src) if src.is_lowercase() => result.extend(ch.to_lowercase()),
            Some(_) => result.push(ch),
            None => result.extend(ch.to_lowercase()),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalized_word() {
        assert_eq!(transfer_capitalization("Hello", "elloHay"), "Ellohay");
        assert_eq!(transfer_capitalization("The", "eThay"), "Ethay");
    }

    #[test]
    fn test_lowercase_word() {
        assert_eq!(transfer_capitalization("quick", "uickqay"), "uickqay");
    }

    #[test]
    fn test_uppercase_word_overlap_only() {
        // Only the overlapping positions follow the source
        assert_eq!(transfer_capitalization("FOX", "oxfay"), "OXFay");
    }

    #[test]
    fn test_mixed_case_is_positional() {
        assert_eq!(transfer_capitalization("McDonald", "cdonaldmay"), "CdOnaldmay");
    }

    #[test]
    fn test_non_alphabetic_source_passes_through() {
        assert_eq!(transfer_capitalization("a'B", "xYz"), "xYZ");
        assert_eq!(transfer_capitalization("1-2", "AbC"), "AbC");
    }

    #[test]
    fn test_extra_target_characters_lowercased() {
        assert_eq!(transfer_capitalization("A", "AWAY"), "Away");
        assert_eq!(transfer_capitalization("", "LOUD"), "loud");
    }

    #[test]
    fn test_shorter_target() {
        assert_eq!(transfer_capitalization("ABCDEF", "xy"), "XY");
        assert_eq!(transfer_capitalization("abc", ""), "");
    }

    #[test]
    fn test_multibyte_positions() {
        assert_eq!(transfer_capitalization("Éa", "aéx"), "Aéx");
    }
}
