//! Boggle search engine
//!
//! Owns the prefix-tree dictionary and the precomputed adjacency table for
//! a fixed board geometry, and enumerates every dictionary word reachable
//! on a given grid. The dictionary is built once and reused across an
//! unbounded number of solve calls; each call allocates only its own
//! visited buffer, prefix buffer, and result set.

use std::fmt;
use std::io;
use std::path::Path;

use rustc_hash::FxHashSet;

use crate::core::{Grid, GridError, Trie};
use crate::wordlists::loader::{self, prepare_word};

use super::adjacency::{Neighbors, compute_adjacency};

/// Board geometry and word-length bounds for a solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub width: usize,
    pub height: usize,
    pub min_len: usize,
    pub max_len: usize,
}

impl SolverConfig {
    /// Config for a `width * height` board accepting words of 3 letters up
    /// to the full board size.
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            min_len: 3,
            max_len: width * height,
        }
    }

    /// Replace the word-length bounds.
    #[must_use]
    pub const fn with_lengths(mut self, min_len: usize, max_len: usize) -> Self {
        self.min_len = min_len;
        self.max_len = max_len;
        self
    }
}

impl Default for SolverConfig {
    /// The classic 4x4 board.
    fn default() -> Self {
        Self::new(4, 4)
    }
}

/// Error type for invalid solver configuration.
///
/// Fatal at construction: a solver with a rejected config never exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    WidthTooSmall(usize),
    HeightTooSmall(usize),
    MinLengthTooSmall(usize),
    MaxLengthExceedsBoard { max_len: usize, board_size: usize },
    MinExceedsMax { min_len: usize, max_len: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WidthTooSmall(width) => {
                write!(f, "board width must be at least 2, got {width}")
            }
            Self::HeightTooSmall(height) => {
                write!(f, "board height must be at least 2, got {height}")
            }
            Self::MinLengthTooSmall(min_len) => {
                write!(f, "minimum word length must be at least 2, got {min_len}")
            }
            Self::MaxLengthExceedsBoard {
                max_len,
                board_size,
            } => write!(
                f,
                "maximum word length {max_len} exceeds board size {board_size}"
            ),
            Self::MinExceedsMax { min_len, max_len } => write!(
                f,
                "minimum word length {min_len} exceeds maximum {max_len}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Boggle solver for one board geometry.
///
/// Construction validates the configuration and precomputes the adjacency
/// table; `load_dictionary`/`load_words` build the internal prefix tree,
/// and `solve` can then be called repeatedly for different grids.
pub struct BoggleSolver {
    width: usize,
    height: usize,
    board_size: usize,
    min_len: usize,
    max_len: usize,
    adjacency: Vec<Neighbors>,
    dictionary: Trie,
    word_count: usize,
}

impl BoggleSolver {
    /// Create a solver for the given configuration.
    ///
    /// # Errors
    /// Returns `ConfigError` unless `width > 1`, `height > 1`,
    /// `min_len > 1`, `max_len <= width * height` and
    /// `min_len <= max_len`.
    pub fn new(config: SolverConfig) -> Result<Self, ConfigError> {
        let SolverConfig {
            width,
            height,
            min_len,
            max_len,
        } = config;

        if width < 2 {
            return Err(ConfigError::WidthTooSmall(width));
        }
        if height < 2 {
            return Err(ConfigError::HeightTooSmall(height));
        }
        if min_len < 2 {
            return Err(ConfigError::MinLengthTooSmall(min_len));
        }
        let board_size = width * height;
        if max_len > board_size {
            return Err(ConfigError::MaxLengthExceedsBoard {
                max_len,
                board_size,
            });
        }
        if min_len > max_len {
            return Err(ConfigError::MinExceedsMax { min_len, max_len });
        }

        Ok(Self {
            width,
            height,
            board_size,
            min_len,
            max_len,
            adjacency: compute_adjacency(width, height),
            dictionary: Trie::new(),
            word_count: 0,
        })
    }

    /// Load the dictionary from a line-oriented word list file.
    ///
    /// Replaces any previously loaded dictionary and returns the number of
    /// accepted entries.
    ///
    /// # Errors
    /// Returns the I/O error if the file cannot be read; the dictionary is
    /// left empty in that case, so the solver stays usable but finds
    /// nothing until a load succeeds.
    pub fn load_dictionary<P: AsRef<Path>>(&mut self, path: P) -> io::Result<usize> {
        self.dictionary = Trie::new();
        self.word_count = 0;

        let lines = loader::read_lines(path)?;
        Ok(self.load_words(lines))
    }

    /// Filter and insert candidate words from any source, returning the
    /// number accepted.
    ///
    /// Each entry passes through the loading policy (length bounds counted
    /// before the "qu" collapse, lowercase first letter, `q` must be
    /// followed by `u`, letters only); a leading "qu" is collapsed to `q`
    /// so a single board cell matches it. May be called repeatedly to add
    /// to the current dictionary.
    pub fn load_words<I>(&mut self, words: I) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut accepted = 0;
        for entry in words {
            if let Some(word) = prepare_word(entry.as_ref(), self.min_len, self.max_len) {
                if self.dictionary.insert(&word) {
                    accepted += 1;
                }
            }
        }
        self.word_count += accepted;
        accepted
    }

    /// Number of entries accepted into the dictionary so far.
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Board width in cells.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Board height in cells.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells on the board.
    #[must_use]
    pub const fn board_size(&self) -> usize {
        self.board_size
    }

    /// Minimum accepted word length.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.min_len
    }

    /// Maximum accepted word length.
    #[must_use]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    /// Generate all solutions for the given grid.
    ///
    /// `grid` must contain exactly `width * height` letters, row-major from
    /// the top-left; `q` stands for "qu". Returns the set of distinct words
    /// found. A valid grid with no matches yields an empty set; a malformed
    /// grid is an error, so the two cases stay distinguishable.
    ///
    /// # Errors
    /// Returns `GridError` if the grid has the wrong letter count or
    /// contains non-letters.
    pub fn solve(&self, grid: &str) -> Result<FxHashSet<String>, GridError> {
        let grid = Grid::parse(grid, self.width, self.height)?;
        let mut found = FxHashSet::default();

        let mut visited = vec![false; self.board_size];
        let mut prefix: Vec<u8> = Vec::with_capacity(self.max_len);

        // One independent traversal rooted at each cell.
        for start in 0..self.board_size {
            let letter = grid.letter(start);
            let Some(node) = self.dictionary.child(letter) else {
                continue;
            };
            visited[start] = true;
            prefix.push(letter);
            self.extend(&grid, start, node, &mut visited, &mut prefix, &mut found);
            prefix.pop();
            visited[start] = false;
        }

        Ok(found)
    }

    /// Depth-first extension of the path ending at `cell`.
    ///
    /// The visited mark and prefix letter pushed for a neighbor are always
    /// popped again before trying the next neighbor, so sibling branches
    /// never observe each other's extensions.
    fn extend(
        &self,
        grid: &Grid,
        cell: usize,
        node: &Trie,
        visited: &mut [bool],
        prefix: &mut Vec<u8>,
        found: &mut FxHashSet<String>,
    ) {
        for &next in &self.adjacency[cell] {
            if visited[next] {
                continue;
            }
            let letter = grid.letter(next);
            let Some(child) = node.child(letter) else {
                // No dictionary word has this prefix.
                continue;
            };

            prefix.push(letter);
            if child.is_word() {
                let word = rehydrate(prefix);
                if word.len() >= self.min_len {
                    found.insert(word);
                }
            }
            // A complete word never stops extension; longer words may
            // share the prefix.
            visited[next] = true;
            self.extend(grid, next, child, visited, prefix, found);
            visited[next] = false;
            prefix.pop();
        }
    }
}

/// Restore the "u" in q-words collapsed at load time.
fn rehydrate(prefix: &[u8]) -> String {
    let mut word = String::with_capacity(prefix.len() + 1);
    let mut letters = prefix.iter();
    if let Some(&first) = letters.next() {
        word.push(first as char);
        if first == b'q' {
            word.push('u');
        }
    }
    word.extend(letters.map(|&letter| letter as char));
    word
}
