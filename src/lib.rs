//! Boggle Solver
//!
//! Finds every dictionary word on a rectangular Boggle grid: words are
//! chains of side- or diagonal-adjacent cells, no cell reused within one
//! word, letters concatenated in traversal order. A prefix-tree dictionary
//! prunes the exhaustive search so only letter chains that can still become
//! words are ever explored.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle_solver::solver::{BoggleSolver, SolverConfig};
//!
//! let mut solver = BoggleSolver::new(SolverConfig::new(4, 4)).unwrap();
//! solver.load_words(["fir", "rift", "quad"]);
//!
//! // 'q' stands for the "Qu" die face.
//! let words = solver.solve("qadfetriihkriflv").unwrap();
//! assert!(words.contains("quad"));
//! ```

// Core domain types
pub mod core;

// Search engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
