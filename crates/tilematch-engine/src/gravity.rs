use tilematch_core::{Cell, Grid, Position};
use tilematch_generator::SymbolGenerator;

/// Drops tiles into empty cells and spawns new tiles at the top.
///
/// Columns are processed left to right, each from the bottom row up. While the
/// current cell is empty, every cell above it moves down one row and the top
/// cell receives a freshly generated symbol. Each step removes one empty cell
/// from the column, so the pass always terminates with no empty cell left.
///
/// New symbols come from [`SymbolGenerator::choose_any`]; the refill does not
/// avoid forming matches. Returns the number of symbols generated.
///
/// # Examples
///
/// ```
/// use tilematch_core::{Grid, Palette};
/// use tilematch_engine::refill;
/// use tilematch_generator::{SymbolGenerator, testing::ScriptedSource};
///
/// let mut grid: Grid = "\
/// A.C
/// .BC
/// ..A
/// "
/// .parse()?;
/// let source = ScriptedSource::from_letters("DBCD");
/// let mut generator = SymbolGenerator::new(Palette::with_size(4)?, Box::new(source));
///
/// assert_eq!(refill(&mut grid, &mut generator), 4);
/// assert_eq!(grid.to_string(), "BDC\nDCC\nABA");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn refill(grid: &mut Grid, generator: &mut SymbolGenerator) -> usize {
    let side = grid.side();
    let mut generated = 0;
    for column in 0..side {
        for row in 0..side {
            while grid[Position::new(column, row)].is_empty() {
                for filler in row..side - 1 {
                    grid[Position::new(column, filler)] = grid[Position::new(column, filler + 1)];
                }
                grid[Position::new(column, side - 1)] = Cell::Filled(generator.choose_any());
                generated += 1;
            }
        }
    }
    log::trace!("refill generated {generated} symbols");
    generated
}
