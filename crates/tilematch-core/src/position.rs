//! Board coordinates.

/// A `(column, row)` coordinate on the board.
///
/// Row 0 is the bottom row and column 0 is the leftmost column. Coordinates are
/// signed so that positions computed from pointer input (or neighbor offsets)
/// may fall outside the board; whether a position is on a given board is
/// checked separately with [`Grid::is_valid_position`] or
/// [`is_valid_position`].
///
/// [`Grid::is_valid_position`]: crate::Grid::is_valid_position
/// [`is_valid_position`]: crate::is_valid_position
///
/// # Examples
///
/// ```
/// use tilematch_core::Position;
///
/// let pos = Position::new(2, 0);
/// assert_eq!(pos.offset(-1, 1), Position::new(1, 1));
/// assert!(pos.is_adjacent(Position::new(2, 1)));
/// assert!(!pos.is_adjacent(Position::new(3, 1)));
/// assert_eq!(pos.to_string(), "(2, 0)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("({column}, {row})")]
pub struct Position {
    /// Column index, growing to the right.
    pub column: i32,
    /// Row index, growing upward.
    pub row: i32,
}

impl Position {
    /// Creates a position from a column and a row.
    #[must_use]
    #[inline]
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Returns the position shifted by `columns` horizontally and `rows` vertically.
    #[must_use]
    #[inline]
    pub const fn offset(self, columns: i32, rows: i32) -> Self {
        Self::new(self.column + columns, self.row + rows)
    }

    /// Returns `true` if `other` shares an edge with this position.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        let dc = (self.column - other.column).abs();
        let dr = (self.row - other.row).abs();
        dc + dr == 1
    }
}

impl From<(i32, i32)> for Position {
    fn from((column, row): (i32, i32)) -> Self {
        Self::new(column, row)
    }
}
