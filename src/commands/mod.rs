//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::run_play;
pub use solve::{SolveResult, solve_grid};
