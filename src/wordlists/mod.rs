//! Word lists for Boggle solving
//!
//! Provides a built-in word list compiled into the binary plus the loader
//! for external dictionary files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid_entries() {
        for &word in WORDS {
            assert!(
                word.len() >= 3 && word.len() <= 16,
                "Word '{word}' has unusable length"
            );
            assert!(
                word.bytes().all(|b| b.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn q_words_are_followed_by_u() {
        // Every built-in q-word must survive the loader's qu rule.
        for &word in WORDS {
            if word.starts_with('q') {
                assert!(word.starts_with("qu"), "Word '{word}' would be rejected");
            }
        }
    }

    #[test]
    fn words_are_sorted_and_unique() {
        for pair in WORDS.windows(2) {
            assert!(pair[0] < pair[1], "'{}' out of order", pair[1]);
        }
    }
}
