use std::io::{BufRead, Write};

use rand::{Rng, seq::IndexedRandom as _};
use tilematch_engine::BoardEngine;

use crate::{CliError, EventLog, MoveReader, Request, render};

const PROMPT: &str = "> ";

/// Runs an interactive session, reading one request per line from `input`.
///
/// The session ends at end of input, on `quit`, or when the score goal is
/// reached. Bad input and off-board positions are reported and the session
/// goes on.
///
/// # Errors
///
/// Returns [`CliError::Io`] if reading `input` or writing `out` fails.
pub fn play<R, W>(
    engine: &mut BoardEngine,
    reader: MoveReader,
    input: R,
    out: &mut W,
) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
{
    let mut events = EventLog::default();
    writeln!(out, "{}", render(engine))?;
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match reader.parse(&line) {
            Ok(Request::Nothing) => {}
            Ok(Request::Quit) => break,
            Ok(Request::Hint) => match engine.productive_swaps().first() {
                Some((a, b)) => writeln!(out, "try {a} <-> {b}")?,
                None => writeln!(out, "no productive swap left")?,
            },
            Ok(Request::Swap(a, b)) => match engine.try_swap_observed(a, b, &mut events) {
                Ok(result) => {
                    for line in events.drain() {
                        writeln!(out, "{line}")?;
                    }
                    if result.changed {
                        writeln!(
                            out,
                            "+{} points in {} rounds",
                            result.score_delta, result.cascade_rounds
                        )?;
                    } else {
                        writeln!(out, "no match; swap undone")?;
                    }
                    writeln!(out, "{}", render(engine))?;
                    if result.goal_reached {
                        writeln!(out, "board complete")?;
                        return Ok(());
                    }
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
            Err(err) => writeln!(out, "error: {err}")?,
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

/// Plays up to `moves` productive swaps chosen with `rng`.
///
/// Stops early when the goal is reached or no productive swap is left.
/// Returns the number of swaps played.
///
/// # Errors
///
/// Returns [`CliError::Io`] if writing `out` fails.
pub fn autoplay<G, W>(
    engine: &mut BoardEngine,
    moves: usize,
    rng: &mut G,
    out: &mut W,
) -> Result<usize, CliError>
where
    G: Rng + ?Sized,
    W: Write,
{
    let mut events = EventLog::default();
    let mut played = 0;
    writeln!(out, "{}", render(engine))?;

    while played < moves && !engine.is_goal_reached() {
        let swaps = engine.productive_swaps();
        let Some(&(a, b)) = swaps.choose(rng) else {
            writeln!(out, "no productive swap left")?;
            break;
        };
        let result = engine.try_swap_observed(a, b, &mut events)?;
        played += 1;
        writeln!(
            out,
            "move {played}: {a} <-> {b} (+{})",
            result.score_delta
        )?;
        for line in events.drain() {
            writeln!(out, "{line}")?;
        }
    }
    log::info!("autoplay finished after {played} moves");

    writeln!(out, "{}", render(engine))?;
    Ok(played)
}
