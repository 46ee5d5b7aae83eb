//! Error types for board construction.

use crate::{Position, SymbolId};

/// An invalid board configuration.
///
/// Returned when building palettes, grids, layouts, or engines from
/// parameters that cannot produce a playable board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The board dimension is zero.
    #[display("board dimension must be at least 1")]
    ZeroDimension,
    /// The board dimension does not fit the coordinate type.
    #[display("board dimension {dimension} is too large")]
    DimensionTooLarge {
        /// Requested dimension.
        dimension: usize,
    },
    /// The palette has no symbols.
    #[display("palette must contain at least one symbol")]
    EmptyPalette,
    /// The palette has more symbols than can be represented.
    #[display("palette has {len} symbols, at most {max} are supported")]
    PaletteTooLarge {
        /// Requested palette size.
        len: usize,
        /// Largest supported palette size.
        max: usize,
    },
    /// The palette lists a symbol twice.
    #[display("palette contains symbol {symbol} more than once")]
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: SymbolId,
    },
    /// A single-symbol palette on a board where runs of three fit.
    ///
    /// Every refill would re-form a match, so cascades would never settle.
    #[display("a single-symbol palette cannot settle a {dimension}x{dimension} board")]
    SingleSymbolPalette {
        /// Board dimension.
        dimension: usize,
    },
    /// A grid does not have the configured dimension.
    #[display("expected a {expected}x{expected} grid, got {actual}x{actual}")]
    DimensionMismatch {
        /// Configured dimension.
        expected: usize,
        /// Dimension of the supplied grid.
        actual: usize,
    },
    /// A supplied grid has an empty cell.
    #[display("cell {position} is empty")]
    UnfilledCell {
        /// Position of the empty cell.
        position: Position,
    },
    /// A supplied grid uses a symbol outside the palette.
    #[display("symbol {symbol} at {position} is not in the palette")]
    ForeignSymbol {
        /// The unknown symbol.
        symbol: SymbolId,
        /// Where it was found.
        position: Position,
    },
    /// Cell spacing for coordinate mapping is zero, negative, or not finite.
    #[display("cell spacing must be a positive finite number")]
    NonPositiveSpacing,
}

/// An error while parsing the text grid format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The input has no rows.
    #[display("grid text is empty")]
    Empty,
    /// A row's length differs from the number of rows.
    #[display("row {line} has {len} cells, expected {expected}")]
    NotSquare {
        /// Zero-based line number, counted from the top.
        line: usize,
        /// Number of cells on that line.
        len: usize,
        /// Number of rows in the grid.
        expected: usize,
    },
    /// A character is neither `.` nor an uppercase letter.
    #[display("invalid cell character {ch:?}")]
    InvalidChar {
        /// The offending character.
        ch: char,
    },
}
