//! Deterministic symbol sources for tests and fixtures.
//!
//! [`ScriptedSource`] replays a fixed sequence of symbols, so a test can state
//! exactly which symbols a refill will spawn and assert the resulting grid.

use tilematch_core::SymbolId;

use crate::SymbolSource;

/// A [`SymbolSource`] that replays a script of symbols in a loop.
///
/// Each pick takes the next scripted symbol that is among the candidates,
/// skipping scripted symbols the generator has ruled out. When no scripted
/// symbol is allowed, the first candidate is used. After the last entry the
/// script starts over.
///
/// # Examples
///
/// ```
/// use tilematch_core::SymbolId;
/// use tilematch_generator::{SymbolSource, testing::ScriptedSource};
///
/// let [a, b, c] = [SymbolId::new(0), SymbolId::new(1), SymbolId::new(2)];
/// let mut source = ScriptedSource::new([a, b, c]);
///
/// assert_eq!(source.pick(&[a, b, c]), a);
/// assert_eq!(source.pick(&[a, c]), c); // `b` is skipped
/// assert_eq!(source.pick(&[a, b, c]), a); // wrapped around
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Vec<SymbolId>,
    cursor: usize,
}

impl ScriptedSource {
    /// Creates a source replaying `script`.
    ///
    /// # Panics
    ///
    /// Panics if `script` is empty.
    #[track_caller]
    pub fn new<I>(script: I) -> Self
    where
        I: IntoIterator<Item = SymbolId>,
    {
        let script: Vec<_> = script.into_iter().collect();
        assert!(!script.is_empty(), "symbol script must not be empty");
        Self { script, cursor: 0 }
    }

    /// Creates a source from a string of symbol letters, such as `"ABCA"`.
    ///
    /// Whitespace is ignored.
    ///
    /// # Panics
    ///
    /// Panics if the string contains anything other than uppercase letters and
    /// whitespace, or no letters at all.
    #[track_caller]
    pub fn from_letters(letters: &str) -> Self {
        Self::new(
            letters
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .map(|ch| {
                    SymbolId::from_char(ch).unwrap_or_else(|| panic!("invalid symbol {ch:?}"))
                }),
        )
    }
}

impl SymbolSource for ScriptedSource {
    fn pick(&mut self, candidates: &[SymbolId]) -> SymbolId {
        for _ in 0..self.script.len() {
            let symbol = self.script[self.cursor];
            self.cursor = (self.cursor + 1) % self.script.len();
            if candidates.contains(&symbol) {
                return symbol;
            }
        }
        candidates[0]
    }
}
