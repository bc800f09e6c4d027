//! Benchmark command
//!
//! Times the solver across many boards.

use crate::solver::BoggleSolver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub boards: usize,
    pub total_words: usize,
    pub min_words: usize,
    pub max_words: usize,
    pub average_words: f64,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Solve `count` boards and aggregate timing statistics.
///
/// Boards are filled with a deterministic cycling alphabet by default, or
/// with uniformly random letters when `random` is set.
///
/// # Panics
///
/// Panics only if the progress bar template fails to parse, which cannot
/// happen for the static template used here.
pub fn run_benchmark(solver: &BoggleSolver, count: usize, random: bool) -> BenchmarkResult {
    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut rng = rand::rng();
    let mut total_words = 0;
    let mut min_words = usize::MAX;
    let mut max_words = 0;

    let start = Instant::now();
    for _ in 0..count {
        let board = if random {
            random_board(solver.board_size(), &mut rng)
        } else {
            cycling_board(solver.board_size())
        };
        // Generated boards always have the right size, so solve cannot fail.
        let found = solver.solve(&board).map_or(0, |words| words.len());

        total_words += found;
        min_words = min_words.min(found);
        max_words = max_words.max(found);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();

    BenchmarkResult {
        boards: count,
        total_words,
        min_words: if count == 0 { 0 } else { min_words },
        max_words,
        average_words: if count == 0 {
            0.0
        } else {
            total_words as f64 / count as f64
        },
        duration,
        boards_per_second: count as f64 / duration.as_secs_f64(),
    }
}

/// The original benchmark fill: "abc...xyzabc..." across the board.
fn cycling_board(board_size: usize) -> String {
    (0..board_size)
        .map(|i| char::from(b'a' + (i % 26) as u8))
        .collect()
}

fn random_board<R: Rng>(board_size: usize, rng: &mut R) -> String {
    (0..board_size)
        .map(|_| char::from(rng.random_range(b'a'..=b'z')))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;

    fn solver() -> BoggleSolver {
        let mut solver = BoggleSolver::new(SolverConfig::new(4, 4)).unwrap();
        solver.load_words(["abc", "fab", "cab"]);
        solver
    }

    #[test]
    fn cycling_board_repeats_alphabet() {
        assert_eq!(cycling_board(4), "abcd");
        assert_eq!(cycling_board(28).as_bytes()[26], b'a');
        assert_eq!(cycling_board(0), "");
    }

    #[test]
    fn random_board_has_right_shape() {
        let mut rng = rand::rng();
        let board = random_board(16, &mut rng);
        assert_eq!(board.len(), 16);
        assert!(board.bytes().all(|b| b.is_ascii_lowercase()));
    }

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(&solver(), 5, false);
        assert_eq!(result.boards, 5);
        assert!(result.min_words <= result.max_words);
        assert!(result.average_words >= result.min_words as f64);
        assert!(result.average_words <= result.max_words as f64);
        assert_eq!(result.total_words, result.max_words * 5); // deterministic boards
    }

    #[test]
    fn benchmark_zero_boards() {
        let result = run_benchmark(&solver(), 0, false);
        assert_eq!(result.boards, 0);
        assert_eq!(result.total_words, 0);
        assert_eq!(result.min_words, 0);
        assert_eq!(result.max_words, 0);
    }

    #[test]
    fn benchmark_random_boards() {
        let result = run_benchmark(&solver(), 3, true);
        assert_eq!(result.boards, 3);
    }
}
