//! Display functions for command results

use super::formatters::{SortOrder, format_columns, sort_words};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::Grid;
use colored::Colorize;

/// Print a boggle grid as a box-drawn table.
///
/// Letters are uppercased; a `q` cell is rendered as `Qu`.
pub fn print_grid(grid: &Grid) {
    let hline = format!("+{}", "---+".repeat(grid.width()));

    println!();
    for row in grid.rows() {
        println!("{hline}");
        let mut line = String::from("|");
        for &cell in row {
            if cell == b'q' {
                line.push_str(" Qu|");
            } else {
                line.push(' ');
                line.push(cell.to_ascii_uppercase() as char);
                line.push_str(" |");
            }
        }
        println!("{line}");
    }
    println!("{hline}");
}

/// Print the result of solving one grid.
///
/// Quiet level 1 suppresses the grid, level 2 the word listing too.
pub fn print_solve_result(result: &SolveResult, order: SortOrder, quiet: u8) {
    println!(
        "\nFound {} solutions for {}x{} grid in {} msec:",
        result.words.len().to_string().bright_yellow().bold(),
        result.grid.width(),
        result.grid.height(),
        format!("{:.2}", result.duration.as_secs_f64() * 1000.0).cyan()
    );

    if quiet < 1 {
        print_grid(&result.grid);
    }
    if quiet < 2 && !result.words.is_empty() {
        let mut words = result.words.clone();
        sort_words(&mut words, order);
        println!();
        print!("{}", format_columns(&words, 4, 18));
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Boards solved:    {}", result.boards);
    println!(
        "   Average words:    {}",
        format!("{:.2}", result.average_words)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest words:     {}",
        format!("{}", result.min_words).yellow()
    );
    println!(
        "   Most words:       {}",
        format!("{}", result.max_words).green()
    );
    println!("   Total words:      {}", result.total_words);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);
}
