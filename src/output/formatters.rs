//! Formatting utilities for terminal output

use std::cmp::Reverse;

/// Word ordering for result listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Alphabetical,
    LongestFirst,
    ShortestFirst,
}

impl SortOrder {
    /// Parse a sort order from its CLI name.
    ///
    /// Unknown names fall back to alphabetical.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "longest" | "l" => Self::LongestFirst,
            "shortest" | "s" => Self::ShortestFirst,
            _ => Self::Alphabetical,
        }
    }
}

/// Sort words for display.
///
/// The length orders are stable over an alphabetical pre-sort, so words of
/// equal length stay alphabetical.
pub fn sort_words(words: &mut [String], order: SortOrder) {
    words.sort_unstable();
    match order {
        SortOrder::Alphabetical => {}
        SortOrder::LongestFirst => words.sort_by_key(|word| Reverse(word.len())),
        SortOrder::ShortestFirst => words.sort_by_key(String::len),
    }
}

/// Lay words out in fixed-width columns.
///
/// Four 18-character columns fit an 80-character display.
#[must_use]
pub fn format_columns(words: &[String], columns: usize, col_width: usize) -> String {
    let mut out = String::new();
    for row in words.chunks(columns.max(1)) {
        let mut line = String::new();
        for word in row {
            line.push_str(&format!("{word:<col_width$} "));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn from_name_recognizes_orders() {
        assert_eq!(SortOrder::from_name("alpha"), SortOrder::Alphabetical);
        assert_eq!(SortOrder::from_name("longest"), SortOrder::LongestFirst);
        assert_eq!(SortOrder::from_name("l"), SortOrder::LongestFirst);
        assert_eq!(SortOrder::from_name("shortest"), SortOrder::ShortestFirst);
        assert_eq!(SortOrder::from_name("SHORTEST"), SortOrder::ShortestFirst);
        assert_eq!(SortOrder::from_name("nonsense"), SortOrder::Alphabetical);
    }

    #[test]
    fn alphabetical_sort() {
        let mut list = words(&["fir", "quad", "ant", "rif"]);
        sort_words(&mut list, SortOrder::Alphabetical);
        assert_eq!(list, words(&["ant", "fir", "quad", "rif"]));
    }

    #[test]
    fn longest_first_keeps_ties_alphabetical() {
        let mut list = words(&["rif", "quads", "ant", "fir", "quilt"]);
        sort_words(&mut list, SortOrder::LongestFirst);
        assert_eq!(list, words(&["quads", "quilt", "ant", "fir", "rif"]));
    }

    #[test]
    fn shortest_first_keeps_ties_alphabetical() {
        let mut list = words(&["quilt", "rif", "fir", "quads"]);
        sort_words(&mut list, SortOrder::ShortestFirst);
        assert_eq!(list, words(&["fir", "rif", "quads", "quilt"]));
    }

    #[test]
    fn columns_wrap_and_pad() {
        let list = words(&["cat", "dog", "emu"]);
        assert_eq!(format_columns(&list, 2, 5), "cat   dog\nemu\n");
    }

    #[test]
    fn columns_empty_input() {
        assert_eq!(format_columns(&[], 4, 18), "");
    }
}
