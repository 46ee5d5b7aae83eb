//! Core data structures for the tilematch puzzle engine.
//!
//! This crate provides the plain data types shared by board generation and the
//! rules engine. It holds no randomness and no game rules; those live in
//! `tilematch-generator` and `tilematch-engine`.
//!
//! # Overview
//!
//! 1. **Coordinates**
//!    - [`position`]: `(column, row)` board coordinates. Row 0 is the bottom row.
//!    - [`layout`]: pure conversion between world points and grid positions.
//!
//! 2. **Tile content**
//!    - [`symbol`]: opaque tile symbols ([`SymbolId`]) and the [`Palette`] of
//!      symbols a board may use.
//!    - [`cell`]: a single grid cell, either empty or holding a symbol.
//!
//! 3. **Containers**
//!    - [`grid`]: the fixed-size square [`Grid`] of cells, with a compact text
//!      format used by fixtures and the terminal driver.
//!
//! # Examples
//!
//! ```
//! use tilematch_core::{Cell, Grid, Position, SymbolId};
//!
//! // Top line is the highest row.
//! let grid: Grid = "\
//! ABC
//! BCA
//! CAB
//! "
//! .parse()?;
//!
//! assert_eq!(grid.dimension(), 3);
//! assert_eq!(grid.symbol_at(Position::new(0, 0)), Some(SymbolId::new(2)));
//! assert_eq!(grid.get(Position::new(3, 0)), None);
//! assert!(grid.cells().all(Cell::is_filled));
//! # Ok::<(), tilematch_core::GridParseError>(())
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod layout;
pub mod position;
pub mod symbol;

pub use self::{
    cell::Cell,
    error::{ConfigError, GridParseError},
    grid::Grid,
    layout::{BoardLayout, WorldPoint, is_valid_position, world_to_grid},
    position::Position,
    symbol::{Palette, SymbolId},
};
