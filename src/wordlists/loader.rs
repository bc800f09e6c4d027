//! Word list loading utilities
//!
//! Reads line-oriented word lists and applies the dictionary acceptance
//! policy before anything reaches the prefix tree.

use std::fs;
use std::io;
use std::path::Path;

/// Read a word list file, one candidate entry per line.
///
/// Blank lines are skipped and surrounding whitespace is trimmed; no other
/// filtering happens here.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use boggle_solver::wordlists::loader::read_lines;
///
/// let lines = read_lines("data/words.txt").unwrap();
/// println!("Read {} entries", lines.len());
/// ```
pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let lines = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    Ok(lines)
}

/// Apply the dictionary acceptance policy to one candidate entry.
///
/// Returns the form to insert into the prefix tree, or `None` if the entry
/// is rejected:
/// - length outside `min_len..=max_len`, counted on the raw entry before
///   the digram collapse
/// - first character not a lowercase ASCII letter (filters proper nouns)
/// - leading `q` not followed by `u`
/// - any character outside `a..=z`
///
/// A leading "qu" is collapsed to a single `q`, so one board cell matches
/// the digram in one step.
#[must_use]
pub fn prepare_word(entry: &str, min_len: usize, max_len: usize) -> Option<String> {
    if entry.len() < min_len || entry.len() > max_len {
        return None;
    }
    let bytes = entry.as_bytes();
    let first = *bytes.first()?;
    if !first.is_ascii_lowercase() {
        return None;
    }
    if !bytes.iter().all(u8::is_ascii_lowercase) {
        return None;
    }
    if first == b'q' {
        if bytes.get(1) != Some(&b'u') {
            return None;
        }
        return Some(format!("q{}", &entry[2..]));
    }
    Some(entry.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_words() {
        assert_eq!(prepare_word("apple", 3, 16), Some("apple".to_string()));
        assert_eq!(prepare_word("fir", 3, 16), Some("fir".to_string()));
    }

    #[test]
    fn rejects_capitalized_words() {
        assert_eq!(prepare_word("Apple", 3, 16), None);
        assert_eq!(prepare_word("APPLE", 3, 16), None);
    }

    #[test]
    fn rejects_q_without_u() {
        assert_eq!(prepare_word("qat", 3, 16), None);
        assert_eq!(prepare_word("qi", 2, 16), None);
    }

    #[test]
    fn collapses_leading_qu() {
        assert_eq!(prepare_word("quilt", 3, 16), Some("qilt".to_string()));
        assert_eq!(prepare_word("quad", 3, 16), Some("qad".to_string()));
        assert_eq!(prepare_word("queen", 3, 16), Some("qeen".to_string()));
    }

    #[test]
    fn interior_qu_is_kept_verbatim() {
        assert_eq!(prepare_word("square", 3, 16), Some("square".to_string()));
    }

    #[test]
    fn length_counted_before_collapse() {
        // "qua" passes the 3-letter minimum even though it occupies only
        // two board cells once collapsed.
        assert_eq!(prepare_word("qua", 3, 16), Some("qa".to_string()));
    }

    #[test]
    fn enforces_length_bounds() {
        assert_eq!(prepare_word("ab", 3, 16), None);
        assert_eq!(prepare_word("abc", 3, 16), Some("abc".to_string()));
        assert_eq!(prepare_word("abcde", 3, 4), None);
        assert_eq!(prepare_word("", 3, 16), None);
    }

    #[test]
    fn rejects_non_letter_characters() {
        assert_eq!(prepare_word("don't", 3, 16), None);
        assert_eq!(prepare_word("re-do", 3, 16), None);
        assert_eq!(prepare_word("caf\u{e9}", 3, 16), None);
    }

    #[test]
    fn read_lines_missing_file_is_an_error() {
        assert!(read_lines("/nonexistent/words.txt").is_err());
    }
}
