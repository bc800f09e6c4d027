//! Prefix-tree dictionary
//!
//! A 26-way trie over lowercase ASCII letters. The word loader builds it
//! once; the search engine then walks it one letter at a time, abandoning
//! any branch with no matching child.

/// A node in the prefix tree.
///
/// Each node owns up to 26 children, one slot per lowercase letter, plus a
/// flag marking whether the path from the root to this node spells a
/// complete accepted word. The root node doubles as the dictionary handle.
#[derive(Debug, Default)]
pub struct Trie {
    children: [Option<Box<Trie>>; 26],
    terminal: bool,
}

impl Trie {
    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, creating missing nodes along its path.
    ///
    /// Re-inserting an existing word is a no-op. Returns `false` without
    /// modifying the tree if the word is empty or contains anything other
    /// than lowercase ASCII letters.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return false;
        }

        let mut node = self;
        for letter in word.bytes() {
            let slot = (letter - b'a') as usize;
            node = node.children[slot].get_or_insert_with(Box::default);
        }
        node.terminal = true;
        true
    }

    /// Child node for `letter`, or `None` if no inserted word extends the
    /// path to this node with that letter.
    ///
    /// This is the pruning primitive: `None` means the whole branch can be
    /// abandoned without ever constructing it.
    #[must_use]
    pub fn child(&self, letter: u8) -> Option<&Self> {
        if letter.is_ascii_lowercase() {
            self.children[(letter - b'a') as usize].as_deref()
        } else {
            None
        }
    }

    /// True iff the path from the root to this node spells an accepted word.
    #[must_use]
    pub const fn is_word(&self) -> bool {
        self.terminal
    }

    /// Walk a full word from this node, returning whether it was inserted.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let mut node = self;
        for letter in word.bytes() {
            match node.child(letter) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.is_word()
    }
}
