//! Tile symbols and palettes.

use std::fmt::{self, Display};

use crate::ConfigError;

/// An opaque tile symbol.
///
/// A symbol only identifies which tiles match each other; how a symbol looks is
/// decided by whoever renders the board. Symbols are written as the letters
/// `A`-`Z` in the text grid format, so at most [`SymbolId::MAX`] distinct
/// symbols exist.
///
/// # Examples
///
/// ```
/// use tilematch_core::SymbolId;
///
/// let symbol = SymbolId::new(2);
/// assert_eq!(symbol.index(), 2);
/// assert_eq!(symbol.as_char(), 'C');
/// assert_eq!(SymbolId::from_char('C'), Some(symbol));
/// assert_eq!(SymbolId::from_char('c'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(u8);

impl SymbolId {
    /// Number of distinct symbols that can be represented.
    pub const MAX: usize = 26;

    /// Creates a symbol from its index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`SymbolId::MAX`].
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < Self::MAX, "symbol index out of range");
        Self(index)
    }

    /// Returns the index of this symbol.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the letter used for this symbol in the text grid format.
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Parses a symbol from an uppercase letter.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        ch.is_ascii_uppercase().then(|| {
            #[expect(clippy::cast_possible_truncation)]
            let index = (ch as u32 - u32::from(b'A')) as u8;
            Self(index)
        })
    }
}

impl Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

/// The distinct symbols a board may place in its cells.
///
/// A palette is never empty and never contains the same symbol twice.
///
/// # Examples
///
/// ```
/// use tilematch_core::{Palette, SymbolId};
///
/// let palette = Palette::with_size(3)?;
/// assert_eq!(palette.size(), 3);
/// assert!(palette.contains(SymbolId::new(2)));
/// assert!(!palette.contains(SymbolId::new(3)));
///
/// assert!(Palette::new(Vec::new()).is_err());
/// # Ok::<(), tilematch_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    symbols: Vec<SymbolId>,
}

impl Palette {
    /// Creates a palette from a list of symbols.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPalette`] if `symbols` is empty, or
    /// [`ConfigError::DuplicateSymbol`] if a symbol appears more than once.
    pub fn new(symbols: Vec<SymbolId>) -> Result<Self, ConfigError> {
        if symbols.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        for (i, symbol) in symbols.iter().enumerate() {
            if symbols[..i].contains(symbol) {
                return Err(ConfigError::DuplicateSymbol { symbol: *symbol });
            }
        }
        Ok(Self { symbols })
    }

    /// Creates a palette of the first `size` symbols (`A`, `B`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPalette`] if `size` is zero, or
    /// [`ConfigError::PaletteTooLarge`] if `size` exceeds [`SymbolId::MAX`].
    pub fn with_size(size: usize) -> Result<Self, ConfigError> {
        if size > SymbolId::MAX {
            return Err(ConfigError::PaletteTooLarge {
                len: size,
                max: SymbolId::MAX,
            });
        }
        let symbols = (0..SymbolId::MAX)
            .take(size)
            .map(|i| SymbolId(u8::try_from(i).unwrap_or(u8::MAX)))
            .collect();
        Self::new(symbols)
    }

    /// Returns the symbols in palette order.
    #[must_use]
    #[inline]
    pub fn symbols(&self) -> &[SymbolId] {
        &self.symbols
    }

    /// Returns the number of symbols. Always at least one.
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if `symbol` belongs to this palette.
    #[must_use]
    #[inline]
    pub fn contains(&self, symbol: SymbolId) -> bool {
        self.symbols.contains(&symbol)
    }
}

impl Default for Palette {
    /// Five symbols, `A` through `E`.
    fn default() -> Self {
        Self {
            symbols: (0..5).map(SymbolId).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a SymbolId;
    type IntoIter = std::slice::Iter<'a, SymbolId>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_char_mapping() {
        assert_eq!(SymbolId::new(0).as_char(), 'A');
        assert_eq!(SymbolId::new(25).as_char(), 'Z');
        assert_eq!(SymbolId::from_char('A'), Some(SymbolId::new(0)));
        assert_eq!(SymbolId::from_char('Z'), Some(SymbolId::new(25)));
        assert_eq!(SymbolId::from_char('.'), None);
        assert_eq!(SymbolId::from_char('1'), None);
        assert_eq!(format!("{}", SymbolId::new(4)), "E");
    }

    #[test]
    #[should_panic(expected = "symbol index out of range")]
    fn test_new_out_of_range_panics() {
        let _ = SymbolId::new(26);
    }

    #[test]
    fn test_palette_rejects_invalid_lists() {
        assert_eq!(Palette::new(Vec::new()), Err(ConfigError::EmptyPalette));
        assert_eq!(
            Palette::new(vec![SymbolId::new(1), SymbolId::new(1)]),
            Err(ConfigError::DuplicateSymbol {
                symbol: SymbolId::new(1)
            })
        );
        assert_eq!(Palette::with_size(0), Err(ConfigError::EmptyPalette));
        assert_eq!(
            Palette::with_size(27),
            Err(ConfigError::PaletteTooLarge { len: 27, max: 26 })
        );
    }

    #[test]
    fn test_palette_with_size_is_prefix() {
        let palette = Palette::with_size(4).unwrap();
        let letters: String = palette.symbols().iter().map(|s| s.as_char()).collect();
        assert_eq!(letters, "ABCD");
        assert_eq!(Palette::default(), Palette::with_size(5).unwrap());
    }
}
