//! Example demonstrating escape-puzzle board generation.
//!
//! This example shows how to:
//! - Create a `BoardGenerator` with an improvement strategy
//! - Generate a random board, or reproduce one from a seed
//! - Sample several boards in parallel and keep the longest solution
//! - Display the board, its solution length, and its difficulty
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! ```
//!
//! Ask for a longer solution and sample a few candidates in parallel,
//! keeping the best:
//!
//! ```sh
//! cargo run --example generate_board -- --length 22 --samples 8
//! ```
//!
//! Reproduce a board from its printed seed:
//!
//! ```sh
//! cargo run --example generate_board -- --seed 4d6f3a9c51e8b2070f1d96c43b78a5e2d90c1f6b84a73520e8d4c9b1f7a6e350
//! ```
//!
//! Print the shortest solution state by state:
//!
//! ```sh
//! cargo run --example generate_board -- --show-path
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use gridlock_core::Board;
use gridlock_generator::{BoardGenerator, GenerateRequest, GeneratedBoard, GeneratorSeed, Strategy};
use gridlock_solver::BfsSolver;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyKind {
    Scan,
    Lookahead,
    DeepLookahead,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Improvement strategy to run after each placement.
    #[arg(long, value_name = "KIND", default_value = "lookahead")]
    strategy: StrategyKind,

    /// Solution length to aim for, in states (1-35).
    #[arg(long, value_name = "STATES", default_value_t = 15)]
    length: usize,

    /// Piece budget, prisoner included.
    #[arg(long, value_name = "COUNT", default_value_t = 12)]
    blocks: usize,

    /// Construction rounds to spend per board.
    #[arg(long, value_name = "COUNT", default_value_t = 10_000)]
    attempts: usize,

    /// Boards to sample in parallel; the longest solution wins.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    samples: usize,

    /// Reproduce the board this 64-hex-digit seed names.
    #[arg(long, value_name = "HEX", conflicts_with = "samples")]
    seed: Option<String>,

    /// Print the shortest solution state by state.
    #[arg(long)]
    show_path: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if !(1..=35).contains(&args.length) {
        eprintln!("--length must be between 1 and 35 states.");
        process::exit(1);
    }
    if args.samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }

    let request = GenerateRequest {
        target_length: args.length,
        target_blocks: args.blocks,
        attempt_budget: args.attempts,
    };
    let generator = BoardGenerator::new(strategy(args.strategy));

    let puzzle = if let Some(seed) = &args.seed {
        match seed.parse::<GeneratorSeed>() {
            Ok(seed) => generator.generate_with_seed(&request, seed),
            Err(error) => {
                eprintln!("Invalid seed: {error}");
                process::exit(2);
            }
        }
    } else {
        (0..args.samples)
            .into_par_iter()
            .map(|_| generator.generate(&request))
            .max_by_key(|puzzle| puzzle.length)
            .unwrap()
    };

    print_board(&puzzle, args.show_path);
}

fn strategy(kind: StrategyKind) -> Strategy {
    match kind {
        StrategyKind::Scan => Strategy::NeighborScan,
        StrategyKind::Lookahead => Strategy::Lookahead { depth: 1 },
        StrategyKind::DeepLookahead => Strategy::Lookahead { depth: 2 },
    }
}

fn print_board(puzzle: &GeneratedBoard, show_path: bool) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Board:");
    print_grid(&puzzle.board);
    println!();

    println!("Solution:");
    println!("  Length: {} states", puzzle.length);
    println!("  Difficulty: {}", puzzle.difficulty());

    if show_path {
        let path = BfsSolver::new()
            .solve(&puzzle.board, puzzle.length + 1)
            .into_path()
            .unwrap();
        for (i, state) in path.iter().enumerate() {
            println!();
            println!("State {}:", i + 1);
            print_grid(state);
        }
    }
}

fn print_grid(board: &Board) {
    for line in board.to_string().lines() {
        println!("  {line}");
    }
}
