//! Grapheme helpers shared by the typing engines.
//!
//! The show content contains accented Spanish text and emoji, so "one
//! character" means one extended grapheme cluster, never one byte or one
//! `char`.

use unicode_segmentation::UnicodeSegmentation;

/// Number of grapheme clusters in `s`.
pub(crate) fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Prefix of `s` containing the first `n` grapheme clusters.
///
/// `n` past the end yields the whole string.
pub(crate) fn grapheme_prefix(s: &str, n: usize) -> &str {
    match s.grapheme_indices(true).nth(n) {
        Some((byte_index, _)) => &s[..byte_index],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_ascii() {
        assert_eq!(grapheme_prefix("hola", 0), "");
        assert_eq!(grapheme_prefix("hola", 2), "ho");
        assert_eq!(grapheme_prefix("hola", 4), "hola");
        assert_eq!(grapheme_prefix("hola", 10), "hola");
    }

    #[test]
    fn test_prefix_multibyte() {
        assert_eq!(grapheme_prefix("¡Hola! 👋", 6), "¡Hola!");
        assert_eq!(grapheme_count("¡Hola! 👋"), 8);
    }
}
