//! Interactive play mode
//!
//! Prompts for grid letters on stdin, solves each completed grid, and
//! prints the results until the user enters a blank line.

use crate::commands::solve::solve_grid;
use crate::output::{SortOrder, print_solve_result};
use crate::solver::BoggleSolver;
use std::io::{self, Write};

/// Run the interactive prompt loop.
///
/// Letters may be entered across several lines; input beyond the board
/// size is ignored. An invalid grid re-prompts instead of exiting.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_play(solver: &BoggleSolver, order: SortOrder, quiet: u8) -> Result<(), String> {
    loop {
        let Some(grid_text) = read_grid(solver.board_size())? else {
            return Ok(());
        };

        match solve_grid(solver, &grid_text) {
            Ok(result) => print_solve_result(&result, order, quiet),
            Err(err) => println!("ERROR: invalid board: {err}"),
        }
    }
}

/// Accumulate input lines until enough letters are gathered.
///
/// A blank line (or end of input) quits, returning `None`.
fn read_grid(board_size: usize) -> Result<Option<String>, String> {
    print!("\nEnter {board_size} letters from boggle grid: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut letters = String::with_capacity(board_size);
    loop {
        let mut line = String::new();
        let read = io::stdin().read_line(&mut line).map_err(|e| e.to_string())?;
        let line = line.trim();
        if read == 0 || line.is_empty() {
            return Ok(None);
        }

        letters.push_str(line);
        if letters.len() >= board_size {
            letters.truncate(board_size);
            return Ok(Some(letters));
        }

        print!("{} more letters needed: ", board_size - letters.len());
        io::stdout().flush().map_err(|e| e.to_string())?;
    }
}
