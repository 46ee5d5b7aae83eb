use tilematch_core::{Cell, Grid, Palette, Position, SymbolId};

use crate::{BoardSeed, BoxedSymbolSource, RandomSource};

/// The already-placed symbols next to a cell being generated.
///
/// `left` holds the symbols one and two columns to the left, `below` the
/// symbols one and two rows below. Missing entries are cells off the grid or not
/// yet filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighbors {
    /// Symbols at `column - 1` and `column - 2`.
    pub left: [Option<SymbolId>; 2],
    /// Symbols at `row - 1` and `row - 2`.
    pub below: [Option<SymbolId>; 2],
}

impl Neighbors {
    /// No neighbors; generation is unrestricted.
    pub const NONE: Self = Self {
        left: [None, None],
        below: [None, None],
    };

    /// Reads the left and lower neighbors of `pos` from `grid`.
    #[must_use]
    pub fn of(grid: &Grid, pos: Position) -> Self {
        Self {
            left: [
                grid.symbol_at(pos.offset(-1, 0)),
                grid.symbol_at(pos.offset(-2, 0)),
            ],
            below: [
                grid.symbol_at(pos.offset(0, -1)),
                grid.symbol_at(pos.offset(0, -2)),
            ],
        }
    }

    /// Returns the symbols that would complete a run of three next to the cell.
    fn forbidden(self) -> impl Iterator<Item = SymbolId> {
        [self.left, self.below]
            .into_iter()
            .filter_map(|[near, far]| near.filter(|_| near == far))
    }
}

/// Picks symbols for newly spawned cells.
///
/// The generator owns the board's [`Palette`] and a [`SymbolSource`]. Symbol
/// choice avoids trivially pre-formed matches: a symbol equal to both of the
/// two cells to the left (or both of the two cells below) is excluded. If that
/// leaves nothing to choose from, the whole palette is used instead, so
/// generation never fails.
///
/// # Examples
///
/// ```
/// use tilematch_core::{Palette, SymbolId};
/// use tilematch_generator::{Neighbors, SymbolGenerator, testing::ScriptedSource};
///
/// let [a, b] = [SymbolId::new(0), SymbolId::new(1)];
/// let source = ScriptedSource::new([a, b]);
/// let mut generator = SymbolGenerator::new(Palette::with_size(2)?, Box::new(source));
///
/// // `A A _` would complete a run, so only `B` is allowed.
/// let neighbors = Neighbors {
///     left: [Some(a), Some(a)],
///     below: [None, None],
/// };
/// assert_eq!(generator.choose(neighbors), b);
/// # Ok::<(), tilematch_core::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct SymbolGenerator {
    palette: Palette,
    source: BoxedSymbolSource,
}

impl SymbolGenerator {
    /// Creates a generator drawing from `source`.
    #[must_use]
    pub fn new(palette: Palette, source: BoxedSymbolSource) -> Self {
        Self { palette, source }
    }

    /// Creates a generator whose output is fully determined by `seed`.
    #[must_use]
    pub fn with_seed(palette: Palette, seed: BoardSeed) -> Self {
        Self::new(palette, Box::new(RandomSource::from_seed(seed)))
    }

    /// Returns the palette symbols are drawn from.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Chooses a symbol for a cell with the given neighbors.
    ///
    /// Symbols forming a run of three with `neighbors.left` or
    /// `neighbors.below` are excluded. When every palette symbol is excluded
    /// the pick falls back to the full palette.
    pub fn choose(&mut self, neighbors: Neighbors) -> SymbolId {
        let mut candidates = self.palette.symbols().to_vec();
        for symbol in neighbors.forbidden() {
            if let Some(i) = candidates.iter().position(|&s| s == symbol) {
                candidates.remove(i);
            }
        }
        if candidates.is_empty() {
            self.source.pick(self.palette.symbols())
        } else {
            self.source.pick(&candidates)
        }
    }

    /// Chooses a symbol from the full palette, ignoring neighbors.
    pub fn choose_any(&mut self) -> SymbolId {
        self.choose(Neighbors::NONE)
    }

    /// Fills every empty cell of `grid`.
    ///
    /// Cells are visited in row-major order from the bottom-left, so the left
    /// and lower neighbors of each cell are already in place when it is chosen.
    pub fn populate(&mut self, grid: &mut Grid) {
        for pos in grid.positions() {
            if grid[pos].is_empty() {
                let symbol = self.choose(Neighbors::of(grid, pos));
                grid[pos] = Cell::Filled(symbol);
            }
        }
    }

    /// Generates a fully populated `dimension × dimension` grid.
    ///
    /// With three or more palette symbols the result never contains a run of
    /// three. Smaller palettes may force one.
    #[must_use]
    pub fn generate_grid(&mut self, dimension: usize) -> Grid {
        let mut grid = Grid::new(dimension);
        self.populate(&mut grid);
        grid
    }
}
