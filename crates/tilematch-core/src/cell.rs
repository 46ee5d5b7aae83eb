//! Grid cell content.

use crate::SymbolId;

/// The content of a single grid cell.
///
/// Cells are only ever empty transiently, between clearing a match and the
/// gravity refill that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum Cell {
    /// No tile.
    #[default]
    Empty,
    /// A tile showing the given symbol.
    Filled(SymbolId),
}

impl Cell {
    /// Returns the symbol of a filled cell.
    #[must_use]
    #[inline]
    pub fn as_symbol(self) -> Option<SymbolId> {
        match self {
            Cell::Empty => None,
            Cell::Filled(symbol) => Some(symbol),
        }
    }

    /// Returns the character used for this cell in the text grid format.
    #[must_use]
    pub fn as_char(self) -> char {
        self.as_symbol().map_or('.', SymbolId::as_char)
    }
}

impl From<SymbolId> for Cell {
    fn from(symbol: SymbolId) -> Self {
        Cell::Filled(symbol)
    }
}

impl From<Option<SymbolId>> for Cell {
    fn from(symbol: Option<SymbolId>) -> Self {
        symbol.map_or(Cell::Empty, Cell::Filled)
    }
}
