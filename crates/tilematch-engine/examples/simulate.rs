//! Plays many seeded boards in parallel and summarizes how they went.
//!
//! Each game always takes the first productive swap until the score goal is
//! reached, no productive swap is left, or the move budget runs out.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example simulate
//! ```
//!
//! Play more games on a larger board with a higher goal:
//!
//! ```sh
//! cargo run --example simulate -- --games 1000 --dimension 10 --goal 1000
//! ```
//!
//! Games are seeded from `--seed` and the game index, so runs are repeatable.

use std::process;

use clap::Parser;
use rayon::prelude::*;
use tilematch_core::Palette;
use tilematch_engine::{BoardConfig, BoardEngine, BoardObserver};
use tilematch_generator::BoardSeed;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of games to play.
    #[arg(long, value_name = "COUNT", default_value_t = 100)]
    games: usize,

    /// Board dimension.
    #[arg(long, value_name = "N", default_value_t = BoardConfig::DEFAULT_DIMENSION)]
    dimension: usize,

    /// Number of distinct symbols.
    #[arg(long, value_name = "COUNT", default_value_t = 5)]
    symbols: usize,

    /// Score goal of every game.
    #[arg(long, value_name = "SCORE", default_value_t = BoardConfig::DEFAULT_SCORE_GOAL)]
    goal: u64,

    /// Maximum swaps per game.
    #[arg(long, value_name = "COUNT", default_value_t = 200)]
    max_moves: usize,

    /// Phrase the per-game seeds are derived from.
    #[arg(long, value_name = "PHRASE", default_value = "simulate")]
    seed: String,
}

#[derive(Debug, Default)]
struct Outcome {
    seed: Option<BoardSeed>,
    moves: usize,
    score: u64,
    longest_cascade: usize,
    goal_move: Option<usize>,
}

/// Tracks the largest number of rounds a single swap produced.
#[derive(Debug, Default)]
struct CascadeMeter {
    rounds: usize,
}

impl BoardObserver for CascadeMeter {
    fn on_tiles_cleared(&mut self, _count: usize) {
        self.rounds += 1;
    }
}

fn main() {
    let args = Args::parse();
    let config = match Palette::with_size(args.symbols) {
        Ok(palette) => BoardConfig::new(args.dimension, palette).with_score_goal(args.goal),
        Err(err) => {
            eprintln!("invalid --symbols: {err}");
            process::exit(2);
        }
    };
    if let Err(err) = config.validate() {
        eprintln!("invalid board: {err}");
        process::exit(2);
    }
    if args.games == 0 {
        eprintln!("--games must be at least 1.");
        process::exit(1);
    }

    let outcomes = (0..args.games)
        .into_par_iter()
        .map(|game| {
            let seed = BoardSeed::from_phrase(&format!("{}-{game}", args.seed));
            play(&config, seed, args.max_moves)
        })
        .collect::<Vec<_>>();

    print_summary(&args, &outcomes);
}

fn play(config: &BoardConfig, seed: BoardSeed, max_moves: usize) -> Outcome {
    let mut engine = BoardEngine::with_seed(config, seed).unwrap();
    let mut outcome = Outcome {
        seed: Some(seed),
        ..Outcome::default()
    };

    while outcome.moves < max_moves && !engine.is_goal_reached() {
        let Some((a, b)) = engine.productive_swaps().first().copied() else {
            break;
        };
        let mut meter = CascadeMeter::default();
        let result = engine.try_swap_observed(a, b, &mut meter).unwrap();
        assert!(result.changed);
        outcome.moves += 1;
        outcome.longest_cascade = outcome.longest_cascade.max(meter.rounds);
        if result.goal_reached {
            outcome.goal_move = Some(outcome.moves);
        }
    }
    outcome.score = engine.score();
    outcome
}

#[expect(clippy::cast_precision_loss)]
fn print_summary(args: &Args, outcomes: &[Outcome]) {
    let won = outcomes
        .iter()
        .filter_map(|outcome| outcome.goal_move)
        .collect::<Vec<_>>();
    let total_score: u64 = outcomes.iter().map(|outcome| outcome.score).sum();

    println!("Board:");
    println!("  {0}x{0}, {1} symbols, goal {2}", args.dimension, args.symbols, args.goal);
    println!();

    println!("Games:");
    println!("  played: {}", outcomes.len());
    println!("  reached goal: {}", won.len());
    if !won.is_empty() {
        let mean = won.iter().sum::<usize>() as f64 / won.len() as f64;
        println!("  mean moves to goal: {mean:.1}");
    }
    println!(
        "  mean score: {:.1}",
        total_score as f64 / outcomes.len() as f64
    );
    println!();

    if let Some(best) = outcomes
        .iter()
        .max_by_key(|outcome| (outcome.longest_cascade, outcome.score))
    {
        println!("Longest cascade:");
        println!("  rounds: {}", best.longest_cascade);
        if let Some(seed) = best.seed {
            println!("  seed: {seed}");
        }
    }
}
