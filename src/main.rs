//! Boggle Solver - CLI
//!
//! Finds all dictionary words in a letter grid. Defaults to the
//! interactive play mode; `solve` handles a single grid and `benchmark`
//! times the engine.

use anyhow::{Context, Result};
use boggle_solver::{
    commands::{run_benchmark, run_play, solve_grid},
    output::{SortOrder, print_benchmark_result, print_solve_result},
    solver::{BoggleSolver, SolverConfig},
    wordlists::WORDS,
};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "boggle_solver",
    about = "Find all dictionary words in a Boggle letter grid",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Board width
    #[arg(short = 'x', long, global = true, default_value = "4")]
    width: usize,

    /// Board height
    #[arg(short = 'y', long, global = true, default_value = "4")]
    height: usize,

    /// Minimum word length
    #[arg(long, global = true, default_value = "3")]
    min_len: usize,

    /// Maximum word length (default: board size)
    #[arg(long, global = true)]
    max_len: Option<usize>,

    /// Path to a word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Sort order: alpha (default), longest, shortest
    #[arg(short = 's', long, global = true, default_value = "alpha")]
    sort: String,

    /// Quiet: -q hides the grid, -qq hides the words too
    #[arg(short = 'q', long, global = true, action = ArgAction::Count)]
    quiet: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: prompt for grids and solve them (default)
    Play,

    /// Solve a single grid given as a flat string
    Solve {
        /// Grid letters, row-major from the top-left; use 'q' for "Qu"
        grid: String,
    },

    /// Benchmark solver performance across many boards
    Benchmark {
        /// Number of boards to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Fill boards with random letters instead of a cycling alphabet
        #[arg(short, long)]
        random: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = SolverConfig {
        width: cli.width,
        height: cli.height,
        min_len: cli.min_len,
        max_len: cli.max_len.unwrap_or(cli.width * cli.height),
    };
    let mut solver = BoggleSolver::new(config)?;

    let word_count = match &cli.wordlist {
        Some(path) => solver
            .load_dictionary(path)
            .with_context(|| format!("unable to open dictionary file: {path}"))?,
        None => solver.load_words(WORDS.iter().copied()),
    };
    eprintln!("dictionary ready: {word_count} words");

    let order = SortOrder::from_name(&cli.sort);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&solver, order, cli.quiet).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { grid } => {
            let result = solve_grid(&solver, &grid)?;
            print_solve_result(&result, order, cli.quiet);
            Ok(())
        }
        Commands::Benchmark { count, random } => {
            let result = run_benchmark(&solver, count, random);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
