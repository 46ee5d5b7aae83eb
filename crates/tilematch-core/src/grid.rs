//! The square board grid.
//!
//! # Text format
//!
//! [`Grid`] implements [`FromStr`] and [`Display`] with one line per row and one
//! character per cell: `A`-`Z` for symbols and `.` for empty cells. Lines are
//! listed from the **top** row (`dimension - 1`) down to row 0, so the text
//! reads the way the board looks. Surrounding whitespace and blank lines are
//! ignored.
//!
//! ```
//! use tilematch_core::{Cell, Grid, Position, SymbolId};
//!
//! let grid: Grid = "
//!     AB.
//!     CAB
//!     BCA
//! "
//! .parse()?;
//!
//! assert_eq!(grid[Position::new(2, 2)], Cell::Empty);
//! assert_eq!(grid[Position::new(0, 0)], Cell::Filled(SymbolId::new(1)));
//! assert_eq!(grid.to_string(), "AB.\nCAB\nBCA");
//! # Ok::<(), tilematch_core::GridParseError>(())
//! ```

use std::{
    fmt::{self, Display, Write as _},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{Cell, GridParseError, Position, SymbolId, layout};

/// A fixed-size square grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    dimension: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid of `dimension × dimension` empty cells.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` does not fit in an `i32` coordinate.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        assert!(
            i32::try_from(dimension).is_ok(),
            "grid dimension {dimension} does not fit the coordinate range"
        );
        Self {
            dimension,
            cells: vec![Cell::Empty; dimension * dimension],
        }
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the dimension as a coordinate value.
    #[must_use]
    #[inline]
    pub fn side(&self) -> i32 {
        // `new` guarantees the dimension fits.
        i32::try_from(self.dimension).unwrap_or(i32::MAX)
    }

    /// Returns `true` if `pos` lies on this grid.
    #[must_use]
    #[inline]
    pub fn is_valid_position(&self, pos: Position) -> bool {
        layout::is_valid_position(pos, self.dimension)
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        if !self.is_valid_position(pos) {
            return None;
        }
        let column = usize::try_from(pos.column).ok()?;
        let row = usize::try_from(pos.row).ok()?;
        Some(row * self.dimension + column)
    }

    /// Returns the cell at `pos`, or `None` if `pos` is off the grid.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    /// Returns the symbol at `pos`.
    ///
    /// Returns `None` for empty cells and for positions off the grid.
    #[must_use]
    #[inline]
    pub fn symbol_at(&self, pos: Position) -> Option<SymbolId> {
        self.get(pos).and_then(Cell::as_symbol)
    }

    /// Exchanges the contents of two cells.
    ///
    /// # Panics
    ///
    /// Panics if either position is off the grid.
    pub fn swap(&mut self, a: Position, b: Position) {
        let (Some(i), Some(j)) = (self.index_of(a), self.index_of(b)) else {
            panic!("cannot swap {a} and {b} on a {0}x{0} grid", self.dimension);
        };
        self.cells.swap(i, j);
    }

    /// Returns all positions in row-major order, starting at the bottom-left.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let side = self.side();
        (0..side).flat_map(move |row| (0..side).map(move |column| Position::new(column, row)))
    }

    /// Returns all cells in row-major order, starting at the bottom-left.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Returns `true` if no column has an empty cell below a filled one.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        let side = self.side();
        (0..side).all(|column| {
            let mut seen_empty = false;
            (0..side).all(|row| match self[Position::new(column, row)] {
                Cell::Empty => {
                    seen_empty = true;
                    true
                }
                Cell::Filled(_) => !seen_empty,
            })
        })
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    /// # Panics
    ///
    /// Panics if `pos` is off the grid.
    #[inline]
    fn index(&self, pos: Position) -> &Self::Output {
        match self.index_of(pos) {
            Some(i) => &self.cells[i],
            None => panic!("position {pos} is outside a {0}x{0} grid", self.dimension),
        }
    }
}

impl IndexMut<Position> for Grid {
    /// # Panics
    ///
    /// Panics if `pos` is off the grid.
    #[inline]
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        match self.index_of(pos) {
            Some(i) => &mut self.cells[i],
            None => panic!("position {pos} is outside a {0}x{0} grid", self.dimension),
        }
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(GridParseError::Empty);
        }

        let dimension = lines.len();
        let mut grid = Self::new(dimension);
        let side = grid.side();
        for ((line_no, line), row) in lines.iter().enumerate().zip((0..side).rev()) {
            let len = line.chars().count();
            if len != dimension {
                return Err(GridParseError::NotSquare {
                    line: line_no,
                    len,
                    expected: dimension,
                });
            }
            for (ch, column) in line.chars().zip(0..side) {
                grid[Position::new(column, row)] = match ch {
                    '.' => Cell::Empty,
                    _ => Cell::Filled(
                        SymbolId::from_char(ch).ok_or(GridParseError::InvalidChar { ch })?,
                    ),
                };
            }
        }
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = self.side();
        for row in (0..side).rev() {
            for column in 0..side {
                f.write_char(self[Position::new(column, row)].as_char())?;
            }
            if row > 0 {
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}
