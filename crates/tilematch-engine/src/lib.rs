//! The tilematch rules engine.
//!
//! [`BoardEngine`] owns a square grid of tiles and resolves player swaps: a swap
//! that lines up three or more equal symbols clears them, tiles above fall into
//! the gaps, new tiles enter from the top, and the board is rescanned until no
//! match remains. A swap that forms no match is undone.
//!
//! # Overview
//!
//! - [`BoardConfig`]: board dimension, palette, and score goal.
//! - [`BoardEngine`]: the state machine. Construct it with
//!   [`BoardEngine::new`], [`BoardEngine::with_seed`], or
//!   [`BoardEngine::from_grid`], then call [`BoardEngine::try_swap`].
//! - [`BoardObserver`]: callbacks for presentation collaborators (a sound per
//!   cleared round, a level transition when the goal is reached).
//! - [`find_matches`] and [`refill`]: the two halves of a resolve round,
//!   exposed for inspection and tests.
//!
//! # Examples
//!
//! ```
//! use tilematch_core::{Grid, Palette, Position};
//! use tilematch_engine::{BoardConfig, BoardEngine};
//! use tilematch_generator::testing::ScriptedSource;
//!
//! let grid: Grid = "\
//! BCD
//! BAD
//! ACA
//! "
//! .parse()?;
//! let config = BoardConfig::new(3, Palette::with_size(4)?).with_score_goal(30);
//! let source = ScriptedSource::from_letters("DBC");
//! let mut engine = BoardEngine::from_grid(grid, &config, Box::new(source))?;
//!
//! // Moving the `A` down lines up three `A`s on the bottom row.
//! let result = engine.try_swap(Position::new(1, 0), Position::new(1, 1))?;
//! assert!(result.changed);
//! assert_eq!(result.tiles_cleared, 3);
//! assert_eq!(engine.score(), 30);
//! assert!(engine.is_goal_reached());
//! assert_eq!(engine.grid().to_string(), "DBC\nBCD\nBCD");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    config::BoardConfig,
    engine::{BoardEngine, ResolveReport, SwapResult, TILE_REWARD},
    error::EngineError,
    gravity::refill,
    matcher::{MIN_RUN, MatchSet, find_matches},
    observer::BoardObserver,
};

mod config;
mod engine;
mod error;
mod gravity;
mod matcher;
mod observer;
