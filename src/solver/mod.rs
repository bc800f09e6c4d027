//! Boggle search engine
//!
//! Adjacency precomputation and the pruned exhaustive grid search.

mod adjacency;
mod engine;

pub use adjacency::{Neighbors, compute_adjacency};
pub use engine::{BoggleSolver, ConfigError, SolverConfig};
