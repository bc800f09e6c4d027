//! Grid solving command
//!
//! Solves a single grid string and times the search.

use crate::core::{Grid, GridError};
use crate::solver::BoggleSolver;
use std::time::{Duration, Instant};

/// Result of solving one grid.
pub struct SolveResult {
    pub grid: Grid,
    pub words: Vec<String>,
    pub duration: Duration,
}

/// Solve a single grid string.
///
/// The returned words are alphabetized; display applies any other sort
/// order on top.
///
/// # Errors
///
/// Returns `GridError` if the grid does not match the solver's dimensions
/// or contains non-letters.
pub fn solve_grid(solver: &BoggleSolver, grid_text: &str) -> Result<SolveResult, GridError> {
    let grid = Grid::parse(grid_text, solver.width(), solver.height())?;

    let start = Instant::now();
    let found = solver.solve(grid_text)?;
    let duration = start.elapsed();

    let mut words: Vec<String> = found.into_iter().collect();
    words.sort_unstable();

    Ok(SolveResult {
        grid,
        words,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;

    fn solver() -> BoggleSolver {
        let mut solver = BoggleSolver::new(SolverConfig::new(4, 4)).unwrap();
        solver.load_words(["quad", "fir", "rif"]);
        solver
    }

    #[test]
    fn solve_grid_returns_alphabetized_words() {
        let result = solve_grid(&solver(), "qadfetriihkriflv").unwrap();
        assert_eq!(result.words, vec!["fir", "quad", "rif"]);
        assert_eq!(result.grid.width(), 4);
    }

    #[test]
    fn solve_grid_rejects_bad_input() {
        assert!(solve_grid(&solver(), "tooshort").is_err());
        assert!(solve_grid(&solver(), "qadfetriihkrifl!").is_err());
    }
}
