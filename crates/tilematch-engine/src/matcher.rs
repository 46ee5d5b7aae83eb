use std::{collections::BTreeSet, iter};

use tilematch_core::{Grid, Position, SymbolId};

/// Minimum number of equal symbols in a line that forms a match.
pub const MIN_RUN: usize = 3;

/// Scan directions: rightward, then upward.
const DIRECTIONS: [(i32, i32); 2] = [(1, 0), (0, 1)];

/// The set of positions matched in one resolve round.
///
/// A position that belongs to both a horizontal and a vertical run appears
/// once. Iteration is in [`Position`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    positions: BTreeSet<Position>,
}

impl MatchSet {
    /// Returns the number of matched positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns `true` if `pos` is matched.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Iterates over the matched positions.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.iter().copied()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = Position;
    type IntoIter = iter::Copied<std::collections::btree_set::Iter<'a, Position>>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter().copied()
    }
}

/// Finds every cell that is part of a run of [`MIN_RUN`] or more equal symbols.
///
/// Each cell is taken as the start of a run extending rightward and a run
/// extending upward. The whole board is scanned before anything is cleared, so
/// every run present on the board is reported together. Empty cells never
/// match.
///
/// # Examples
///
/// ```
/// use tilematch_core::{Grid, Position};
/// use tilematch_engine::find_matches;
///
/// let grid: Grid = "\
/// ABCD
/// ABDC
/// ACCC
/// BDAB
/// "
/// .parse()?;
///
/// let matches = find_matches(&grid);
/// // Column 0 has `A A A` above the `B`; row 1 has `C C C` after the `A`.
/// assert_eq!(matches.len(), 6);
/// assert!(matches.contains(Position::new(0, 1)));
/// assert!(matches.contains(Position::new(3, 1)));
/// assert!(!matches.contains(Position::new(0, 0)));
/// # Ok::<(), tilematch_core::GridParseError>(())
/// ```
#[must_use]
pub fn find_matches(grid: &Grid) -> MatchSet {
    let mut matches = MatchSet::default();
    for pos in grid.positions() {
        let Some(symbol) = grid.symbol_at(pos) else {
            continue;
        };
        for (dc, dr) in DIRECTIONS {
            let run: Vec<Position> = run_from(grid, pos, symbol, dc, dr).collect();
            if run.len() >= MIN_RUN {
                matches.positions.extend(run);
            }
        }
    }
    matches
}

/// Positions from `start` onward in one direction that hold `symbol`.
fn run_from(
    grid: &Grid,
    start: Position,
    symbol: SymbolId,
    dc: i32,
    dr: i32,
) -> impl Iterator<Item = Position> + '_ {
    iter::successors(Some(start), move |pos| Some(pos.offset(dc, dr)))
        .take_while(move |&pos| grid.symbol_at(pos) == Some(symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    #[test]
    fn test_stable_board_has_no_matches() {
        let g = grid(
            "
            ABAB
            BABA
            ABAB
            BABA
            ",
        );
        assert!(find_matches(&g).is_empty());
    }

    #[test]
    fn test_horizontal_run_of_three() {
        let g = grid(
            "
            ABC
            BCA
            AAA
            ",
        );
        let matches = find_matches(&g);
        let positions: Vec<_> = matches.iter().collect();
        assert_eq!(
            positions,
            [
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0)
            ]
        );
    }

    #[test]
    fn test_vertical_run_includes_top_edge() {
        let g = grid(
            "
            BA.
            BCA
            BAC
            ",
        );
        let matches = find_matches(&g);
        assert_eq!(matches.len(), 3);
        for row in 0..3 {
            assert!(matches.contains(Position::new(0, row)));
        }
    }

    #[test]
    fn test_run_longer_than_three() {
        let g = grid(
            "
            BCAB.
            CABC.
            ABCA.
            BCAB.
            DDDDD
            ",
        );
        let matches = find_matches(&g);
        assert_eq!(matches.len(), 5);
        assert!((0..5).all(|column| matches.contains(Position::new(column, 0))));
    }

    #[test]
    fn test_crossing_runs_count_shared_cell_once() {
        let g = grid(
            "
            BAC
            AAA
            CAB
            ",
        );
        let matches = find_matches(&g);
        // Row 1 and column 1 share the center cell.
        assert_eq!(matches.len(), 5);
        assert!(matches.contains(Position::new(1, 1)));
    }

    #[test]
    fn test_empty_cells_never_match() {
        let g = grid(
            "
            ...
            ...
            ...
            ",
        );
        assert!(find_matches(&g).is_empty());
    }

    #[test]
    fn test_pairs_do_not_match() {
        let g = grid(
            "
            AAB
            BBA
            AAB
            ",
        );
        assert!(find_matches(&g).is_empty());
    }
}
