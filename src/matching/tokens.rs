// Word tokenizer for generic overlap scoring.

use std::collections::HashSet;

/// Split text into the set of distinct word tokens.
///
/// A token is a maximal run of alphanumeric or underscore characters;
/// everything else separates tokens. Input is expected to be lowercased
/// already.
pub fn word_set(text: &str) -> HashSet<&str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_non_word_chars() {
        let words = word_set("sin(x) + cos_2x, 3.5");
        let expected: HashSet<&str> = ["sin", "x", "cos_2x", "3", "5"].into_iter().collect();
        assert_eq!(words, expected);
    }

    #[test]
    fn test_deduplicates() {
        assert_eq!(word_set("area area area").len(), 1);
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert!(word_set("").is_empty());
        assert!(word_set("  -- ,, ").is_empty());
    }

    #[test]
    fn test_unicode_letters_are_word_chars() {
        let words = word_set("théorème de pythagore");
        assert!(words.contains("théorème"));
    }
}
