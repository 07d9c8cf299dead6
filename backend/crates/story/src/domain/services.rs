//! Domain Services
//!
//! Pure text processing for story content.

/// ASCII letters, digits and `_` form words; every other character separates them.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Count the words of free-form text.
///
/// Punctuation, whitespace and non-ASCII characters all act as separators, so
/// `"well-formed, text!"` has three words.
pub fn count_words(text: &str) -> u32 {
    let words = text
        .split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
        .count();
    u32::try_from(words).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words_basic() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("one two three"), 3);
        assert_eq!(count_words("well-formed, text!"), 3);
    }

    #[test]
    fn test_count_words_separators_only() {
        assert_eq!(count_words("   \n\t  "), 0);
        assert_eq!(count_words("... --- !!!"), 0);
    }

    #[test]
    fn test_count_words_collapses_runs_of_separators() {
        assert_eq!(count_words("  leading\n\ntrailing  "), 2);
        assert_eq!(count_words("a,,,b;;;c"), 3);
    }

    #[test]
    fn test_count_words_underscore_and_digits_are_word_chars() {
        assert_eq!(count_words("snake_case 2024 v2"), 3);
    }

    #[test]
    fn test_count_words_non_ascii_splits() {
        assert_eq!(count_words("naïve"), 2);
        assert_eq!(count_words("don't"), 2);
    }

    #[test]
    fn test_count_words_repeated_text() {
        let text = "word ".repeat(1500);
        assert_eq!(count_words(&text), 1500);
    }
}
