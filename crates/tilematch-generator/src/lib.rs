//! Symbol generation for tilematch boards.
//!
//! This crate decides which symbol appears in a newly spawned cell. It owns all
//! randomness used by the engine, behind the [`SymbolSource`] trait so callers
//! can choose between seeded random boards and fully scripted ones.
//!
//! # Overview
//!
//! - [`SymbolGenerator`] picks a symbol from a [`Palette`], avoiding symbols
//!   that would complete a run of three with the two cells to the left or the
//!   two cells below. It also populates whole grids.
//! - [`SymbolSource`] is the random capability the generator draws from.
//!   [`RandomSource`] wraps any [`rand::Rng`]; [`SymbolGenerator::with_seed`]
//!   uses a PCG generator seeded from a [`BoardSeed`].
//! - [`BoardSeed`] is a 256-bit seed that round-trips through a hex string, so a
//!   board can be reproduced exactly.
//! - [`testing::ScriptedSource`] replays a fixed symbol sequence.
//!
//! [`Palette`]: tilematch_core::Palette
//!
//! # Examples
//!
//! ```
//! use tilematch_core::Palette;
//! use tilematch_generator::{BoardSeed, SymbolGenerator};
//!
//! let seed: BoardSeed = "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff"
//!     .parse()?;
//! let mut first = SymbolGenerator::with_seed(Palette::with_size(4)?, seed);
//! let mut second = SymbolGenerator::with_seed(Palette::with_size(4)?, seed);
//!
//! // Same seed, same board.
//! assert_eq!(first.generate_grid(6), second.generate_grid(6));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    seed::{BoardSeed, ParseSeedError},
    source::{BoxedSymbolSource, RandomSource, SymbolSource},
    symbol_generator::{Neighbors, SymbolGenerator},
};

mod seed;
mod source;
mod symbol_generator;
pub mod testing;
