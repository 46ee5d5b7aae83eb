//! Terminal tile-matching game.
//!
//! ```sh
//! tilematch play --seed demo
//! tilematch autoplay --moves 50 --dimension 10 --symbols 6
//! ```

use std::{
    io::{self, Write as _},
    process,
};

use clap::Parser as _;
use tilematch_cli::{Args, CliError, Command, MoveReader, autoplay, play};
use tilematch_engine::BoardEngine;
use tilematch_generator::BoardSeed;

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = args.board.config()?;
    let seed = args.board.seed();
    let mut engine = BoardEngine::with_seed(&config, seed)?;
    log::info!("board seed {seed}");

    let mut stdout = io::stdout().lock();
    match args.command {
        Command::Play { .. } => {
            let reader = match args.command.layout(config.dimension())? {
                Some(layout) => MoveReader::World(layout),
                None => MoveReader::Grid,
            };
            writeln!(stdout, "seed {seed}")?;
            play(&mut engine, reader, io::stdin().lock(), &mut stdout)
        }
        Command::Autoplay { moves } => {
            // Move choice gets its own stream so it does not disturb refills.
            let mut rng = BoardSeed::from_phrase(&format!("{seed}/autoplay")).to_rng();
            let played = autoplay(&mut engine, moves, &mut rng, &mut stdout)?;
            log::debug!("played {played} of {moves} moves");
            Ok(())
        }
    }
}
