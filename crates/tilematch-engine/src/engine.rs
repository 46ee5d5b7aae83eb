use tilematch_core::{Cell, ConfigError, Grid, Palette, Position, SymbolId};
use tilematch_generator::{BoardSeed, BoxedSymbolSource, RandomSource, SymbolGenerator};

use crate::{BoardConfig, BoardObserver, EngineError, find_matches, refill};

/// Points awarded for every cleared tile.
pub const TILE_REWARD: u64 = 10;

/// The outcome of running the resolve loop until the board is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolveReport {
    /// Tiles cleared across all rounds.
    pub tiles_cleared: usize,
    /// Score gained across all rounds.
    pub score_delta: u64,
    /// Number of rounds that cleared at least one tile.
    pub rounds: usize,
    /// `true` if the score goal was reached during this resolve.
    pub goal_reached: bool,
}

impl ResolveReport {
    /// Returns `true` if any tile was cleared.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.tiles_cleared > 0
    }
}

/// The outcome of [`BoardEngine::try_swap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwapResult {
    /// `true` if the swap was kept. A swap that forms no match is undone.
    pub changed: bool,
    /// Tiles cleared across all cascade rounds.
    pub tiles_cleared: usize,
    /// Score gained by this swap.
    pub score_delta: u64,
    /// Number of match rounds, including cascades after the first.
    pub cascade_rounds: usize,
    /// `true` if the goal was announced during this swap. This happens once
    /// per engine: on the swap that brings the score to the goal, or on the
    /// first swap when the goal is zero.
    pub goal_reached: bool,
}

impl From<ResolveReport> for SwapResult {
    fn from(report: ResolveReport) -> Self {
        Self {
            changed: report.changed(),
            tiles_cleared: report.tiles_cleared,
            score_delta: report.score_delta,
            cascade_rounds: report.rounds,
            goal_reached: report.goal_reached,
        }
    }
}

/// A tile-matching board and its rules.
///
/// The engine owns the grid, the symbol generator, and the score. Between
/// calls the grid is always fully filled; after any swap no run of
/// [`MIN_RUN`](crate::MIN_RUN) equal symbols remains.
///
/// # Example
///
/// ```
/// use tilematch_core::Position;
/// use tilematch_engine::{BoardConfig, BoardEngine};
/// use tilematch_generator::BoardSeed;
///
/// let config = BoardConfig::default();
/// let mut engine = BoardEngine::with_seed(&config, BoardSeed::from_phrase("demo"))?;
/// assert_eq!(engine.score(), 0);
///
/// if let Some((a, b)) = engine.productive_swaps().first().copied() {
///     let result = engine.try_swap(a, b)?;
///     assert!(result.changed);
///     assert_eq!(engine.score(), result.score_delta);
/// }
/// # Ok::<(), tilematch_engine::EngineError>(())
/// ```
#[derive(Debug)]
pub struct BoardEngine {
    grid: Grid,
    generator: SymbolGenerator,
    score: u64,
    score_goal: u64,
    goal_announced: bool,
}

impl BoardEngine {
    /// Creates a board filled by the symbol generator.
    ///
    /// Cells are generated row by row from the bottom-left, avoiding runs of
    /// three where the palette allows it. The score starts at zero.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] if `config` fails
    /// [`BoardConfig::validate`].
    pub fn new(config: &BoardConfig, source: BoxedSymbolSource) -> Result<Self, EngineError> {
        config.validate()?;
        let mut generator = SymbolGenerator::new(config.palette().clone(), source);
        let grid = generator.generate_grid(config.dimension());
        log::debug!(
            "generated {0}x{0} board with {1} symbols",
            config.dimension(),
            config.palette().size()
        );
        Ok(Self::assemble(grid, generator, config))
    }

    /// Creates a board whose tiles, and every later refill, are determined by
    /// `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] if `config` is invalid.
    pub fn with_seed(config: &BoardConfig, seed: BoardSeed) -> Result<Self, EngineError> {
        log::debug!("seeding board with {seed}");
        Self::new(config, Box::new(RandomSource::from_seed(seed)))
    }

    /// Creates an engine for an existing grid.
    ///
    /// The grid is taken as is: runs already on it are only cleared by the
    /// next swap or [`resolve`](Self::resolve). `source` supplies refills.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] if `config` is invalid,
    /// the grid dimension differs from the configured one, a cell is empty, or
    /// a cell holds a symbol outside the palette.
    pub fn from_grid(
        grid: Grid,
        config: &BoardConfig,
        source: BoxedSymbolSource,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        if grid.dimension() != config.dimension() {
            return Err(ConfigError::DimensionMismatch {
                expected: config.dimension(),
                actual: grid.dimension(),
            }
            .into());
        }
        for position in grid.positions() {
            match grid[position] {
                Cell::Empty => return Err(ConfigError::UnfilledCell { position }.into()),
                Cell::Filled(symbol) if !config.palette().contains(symbol) => {
                    return Err(ConfigError::ForeignSymbol { symbol, position }.into());
                }
                Cell::Filled(_) => {}
            }
        }
        let generator = SymbolGenerator::new(config.palette().clone(), source);
        Ok(Self::assemble(grid, generator, config))
    }

    fn assemble(grid: Grid, generator: SymbolGenerator, config: &BoardConfig) -> Self {
        Self {
            grid,
            generator,
            score: 0,
            score_goal: config.score_goal(),
            goal_announced: false,
        }
    }

    /// Returns the current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the number of rows and columns.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.grid.dimension()
    }

    /// Returns the symbols tiles are drawn from.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        self.generator.palette()
    }

    /// Returns the symbol at `pos`, or `None` if `pos` is off the board.
    #[must_use]
    pub fn symbol_at(&self, pos: Position) -> Option<SymbolId> {
        self.grid.symbol_at(pos)
    }

    /// Returns `true` if `pos` lies on the board.
    #[must_use]
    pub fn is_valid_position(&self, pos: Position) -> bool {
        self.grid.is_valid_position(pos)
    }

    /// Returns the current score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Returns the score goal.
    #[must_use]
    pub fn score_goal(&self) -> u64 {
        self.score_goal
    }

    /// Returns `true` once the score has reached the goal.
    ///
    /// A zero goal is reached from the start.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.score >= self.score_goal
    }

    /// Swaps two cells and resolves the board.
    ///
    /// Equivalent to [`try_swap_observed`](Self::try_swap_observed) with an
    /// observer that ignores all events.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if either position is off the
    /// board. The board is not modified.
    pub fn try_swap(&mut self, a: Position, b: Position) -> Result<SwapResult, EngineError> {
        self.try_swap_observed(a, b, &mut ())
    }

    /// Swaps two cells, resolves the board, and reports events to `observer`.
    ///
    /// The positions need not be adjacent. After the exchange the resolve loop
    /// runs until the board is stable. If no match was found the exchange is
    /// undone and the board is exactly as before. Otherwise the swap is kept
    /// and the result sums up every cascade round.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if either position is off the
    /// board. The board is not modified.
    pub fn try_swap_observed<O>(
        &mut self,
        a: Position,
        b: Position,
        observer: &mut O,
    ) -> Result<SwapResult, EngineError>
    where
        O: BoardObserver + ?Sized,
    {
        self.check_position(a)?;
        self.check_position(b)?;

        self.grid.swap(a, b);
        let report = self.resolve(observer);
        if report.changed() {
            log::debug!(
                "swap {a} <-> {b} cleared {} tiles in {} rounds",
                report.tiles_cleared,
                report.rounds
            );
        } else {
            self.grid.swap(a, b);
            log::debug!("swap {a} <-> {b} formed no match, reverted");
        }
        Ok(report.into())
    }

    /// Clears matches and refills until no match remains.
    ///
    /// Each round finds every run on the board, clears all of them at once,
    /// awards [`TILE_REWARD`] per cleared tile, notifies `observer`, and
    /// refills the grid. On a stable board nothing is cleared.
    ///
    /// A goal met before any tile was cleared (a zero goal) is announced to
    /// the first observer passed here or to a swap.
    pub fn resolve<O>(&mut self, observer: &mut O) -> ResolveReport
    where
        O: BoardObserver + ?Sized,
    {
        let mut report = ResolveReport::default();
        self.announce_goal(&mut report, observer);
        loop {
            let matches = find_matches(&self.grid);
            if matches.is_empty() {
                break;
            }
            for pos in &matches {
                self.grid[pos] = Cell::Empty;
            }

            let cleared = matches.len();
            let delta = TILE_REWARD * cleared as u64;
            self.score += delta;
            report.rounds += 1;
            report.tiles_cleared += cleared;
            report.score_delta += delta;
            log::debug!(
                "round {}: cleared {cleared} tiles, score {}",
                report.rounds,
                self.score
            );
            observer.on_tiles_cleared(cleared);

            self.announce_goal(&mut report, observer);
            refill(&mut self.grid, &mut self.generator);
        }
        report
    }

    /// Returns the adjacent swaps that would clear at least one tile.
    ///
    /// Pairs are listed once, lower position first, in row-major order.
    #[must_use]
    pub fn productive_swaps(&self) -> Vec<(Position, Position)> {
        let mut scratch = self.grid.clone();
        let mut swaps = Vec::new();
        for a in self.grid.positions() {
            for b in [a.offset(1, 0), a.offset(0, 1)] {
                if !scratch.is_valid_position(b) {
                    continue;
                }
                scratch.swap(a, b);
                if !find_matches(&scratch).is_empty() {
                    swaps.push((a, b));
                }
                scratch.swap(a, b);
            }
        }
        swaps
    }

    fn announce_goal<O>(&mut self, report: &mut ResolveReport, observer: &mut O)
    where
        O: BoardObserver + ?Sized,
    {
        if !self.goal_announced && self.is_goal_reached() {
            self.goal_announced = true;
            report.goal_reached = true;
            log::info!("score goal {} reached at {}", self.score_goal, self.score);
            observer.on_goal_reached();
        }
    }

    fn check_position(&self, position: Position) -> Result<(), EngineError> {
        if self.grid.is_valid_position(position) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                position,
                dimension: self.grid.dimension(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tilematch_generator::testing::ScriptedSource;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Cleared(usize),
        Goal,
    }

    #[derive(Debug, Default)]
    struct Recorder {
        events: Vec<Event>,
    }

    impl BoardObserver for Recorder {
        fn on_tiles_cleared(&mut self, count: usize) {
            self.events.push(Event::Cleared(count));
        }

        fn on_goal_reached(&mut self) {
            self.events.push(Event::Goal);
        }
    }

    fn engine(grid: &str, palette_size: usize, goal: u64, script: &str) -> BoardEngine {
        let grid: Grid = grid.parse().unwrap();
        let config = BoardConfig::new(grid.dimension(), Palette::with_size(palette_size).unwrap())
            .with_score_goal(goal);
        BoardEngine::from_grid(grid, &config, Box::new(ScriptedSource::from_letters(script)))
            .unwrap()
    }

    // Swapping (2, 0) and (3, 0) clears `A A A` on row 0. The refill drops
    // `C C` from row 1 next to the `C` that moved to (3, 0), which clears a
    // second time.
    const CASCADE: &str = "
        DBDC
        CDAB
        BCCD
        AACA
    ";
    const CASCADE_SCRIPT: &str = "AAB CDA";
    const CASCADE_RESULT: &str = "ACDA\nDABC\nCBDB\nBDAD";

    #[test]
    fn test_new_board_is_full_and_stable() {
        let config = BoardConfig::default();
        let engine = BoardEngine::with_seed(&config, BoardSeed::from_phrase("stable")).unwrap();
        assert_eq!(engine.dimension(), 8);
        assert_eq!(engine.grid().empty_count(), 0);
        assert!(find_matches(engine.grid()).is_empty());
        assert_eq!(engine.score(), 0);
        assert!(!engine.is_goal_reached());
    }

    #[test]
    fn test_same_seed_same_board() {
        let config = BoardConfig::default();
        let seed = BoardSeed::from_phrase("twins");
        let a = BoardEngine::with_seed(&config, seed).unwrap();
        let b = BoardEngine::with_seed(&config, seed).unwrap();
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_new_rejects_invalid_configuration() {
        let config = BoardConfig::new(0, Palette::default());
        let source = Box::new(ScriptedSource::from_letters("A"));
        assert!(matches!(
            BoardEngine::new(&config, source),
            Err(EngineError::InvalidConfiguration(ConfigError::ZeroDimension))
        ));

        let build = || -> Result<BoardEngine, EngineError> {
            let palette = Palette::new(Vec::new())?;
            BoardEngine::with_seed(&BoardConfig::new(4, palette), BoardSeed::from_phrase("x"))
        };
        assert!(matches!(
            build(),
            Err(EngineError::InvalidConfiguration(ConfigError::EmptyPalette))
        ));
    }

    #[test]
    fn test_from_grid_validation() {
        let config = BoardConfig::new(2, Palette::with_size(2).unwrap());
        let source = || Box::new(ScriptedSource::from_letters("A"));

        let grid: Grid = "ABA\nBAB\nABA".parse().unwrap();
        assert!(matches!(
            BoardEngine::from_grid(grid, &config, source()),
            Err(EngineError::InvalidConfiguration(
                ConfigError::DimensionMismatch {
                    expected: 2,
                    actual: 3
                }
            ))
        ));

        let grid: Grid = "A.\nBA".parse().unwrap();
        assert!(matches!(
            BoardEngine::from_grid(grid, &config, source()),
            Err(EngineError::InvalidConfiguration(ConfigError::UnfilledCell { position }))
                if position == Position::new(1, 1)
        ));

        let grid: Grid = "AB\nCA".parse().unwrap();
        assert!(matches!(
            BoardEngine::from_grid(grid, &config, source()),
            Err(EngineError::InvalidConfiguration(ConfigError::ForeignSymbol { symbol, position }))
                if symbol == SymbolId::new(2) && position == Position::new(0, 0)
        ));
    }

    #[test]
    fn test_swap_without_match_is_reverted() {
        // Rows from the bottom: [A B A], [B A B], [A A B].
        let mut engine = engine("AAB\nBAB\nABA", 2, 100, "A");
        let before = engine.grid().clone();
        let mut recorder = Recorder::default();

        let result = engine
            .try_swap_observed(Position::new(2, 2), Position::new(1, 2), &mut recorder)
            .unwrap();

        assert_eq!(result, SwapResult::default());
        assert_eq!(engine.grid(), &before);
        assert_eq!(engine.score(), 0);
        assert!(recorder.events.is_empty());
    }

    #[test]
    fn test_out_of_bounds_swap_is_rejected() {
        let mut engine = engine("AAB\nBAB\nABA", 2, 100, "A");
        let before = engine.grid().clone();

        assert_eq!(
            engine.try_swap(Position::new(-1, 0), Position::new(0, 0)),
            Err(EngineError::OutOfBounds {
                position: Position::new(-1, 0),
                dimension: 3
            })
        );
        assert_eq!(
            engine.try_swap(Position::new(0, 0), Position::new(0, 3)),
            Err(EngineError::OutOfBounds {
                position: Position::new(0, 3),
                dimension: 3
            })
        );
        assert_eq!(engine.grid(), &before);
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_cascade_accumulates_rounds() {
        let mut engine = engine(CASCADE, 4, 50, CASCADE_SCRIPT);
        let mut recorder = Recorder::default();

        let result = engine
            .try_swap_observed(Position::new(2, 0), Position::new(3, 0), &mut recorder)
            .unwrap();

        assert_eq!(
            result,
            SwapResult {
                changed: true,
                tiles_cleared: 6,
                score_delta: 60,
                cascade_rounds: 2,
                goal_reached: true,
            }
        );
        assert_eq!(
            recorder.events,
            [Event::Cleared(3), Event::Cleared(3), Event::Goal]
        );
        assert_eq!(engine.score(), 60);
        assert!(engine.is_goal_reached());
        assert_eq!(engine.grid().to_string(), CASCADE_RESULT);
        assert!(find_matches(engine.grid()).is_empty());
    }

    #[test]
    fn test_swap_order_does_not_matter() {
        let mut forward = engine(CASCADE, 4, 100, CASCADE_SCRIPT);
        let mut backward = engine(CASCADE, 4, 100, CASCADE_SCRIPT);
        let a = Position::new(2, 0);
        let b = Position::new(3, 0);
        assert_eq!(forward.try_swap(a, b), backward.try_swap(b, a));
        assert_eq!(forward.grid(), backward.grid());
    }

    #[test]
    fn test_resolve_on_stable_board_is_noop() {
        let mut engine = engine(CASCADE_RESULT, 4, 100, "A");
        let before = engine.grid().clone();
        let mut recorder = Recorder::default();

        let report = engine.resolve(&mut recorder);

        assert_eq!(report, ResolveReport::default());
        assert!(!report.changed());
        assert_eq!(engine.grid(), &before);
        assert_eq!(engine.score(), 0);
        assert!(recorder.events.is_empty());
    }

    #[test]
    fn test_goal_fires_once() {
        // The cascade board after the swap, resolved directly.
        let swapped = "
            DBDC
            CDAB
            BCCD
            AAAC
        ";
        let mut engine = engine(swapped, 4, 10, CASCADE_SCRIPT);
        let mut recorder = Recorder::default();

        let report = engine.resolve(&mut recorder);

        assert_eq!(report.rounds, 2);
        assert!(report.goal_reached);
        assert_eq!(
            recorder.events,
            [Event::Cleared(3), Event::Goal, Event::Cleared(3)]
        );
        assert_eq!(engine.grid().to_string(), CASCADE_RESULT);

        let again = engine.resolve(&mut recorder);
        assert!(!again.goal_reached);
        assert_eq!(recorder.events.len(), 3);
    }

    #[test]
    fn test_zero_goal_is_announced_once() {
        let mut board = engine(CASCADE, 4, 0, CASCADE_SCRIPT);
        assert!(board.is_goal_reached());
        let mut recorder = Recorder::default();

        let result = board
            .try_swap_observed(Position::new(2, 0), Position::new(3, 0), &mut recorder)
            .unwrap();

        assert!(result.goal_reached);
        assert_eq!(
            recorder.events,
            [Event::Goal, Event::Cleared(3), Event::Cleared(3)]
        );
        assert_eq!(board.score(), 60);

        let again = board.resolve(&mut recorder);
        assert!(!again.goal_reached);
        assert_eq!(recorder.events.len(), 3);
    }

    #[test]
    fn test_zero_goal_is_announced_by_a_reverted_swap() {
        let mut board = engine(CASCADE_RESULT, 4, 0, "A");
        let before = board.grid().clone();
        let mut recorder = Recorder::default();

        let result = board
            .try_swap_observed(Position::new(0, 0), Position::new(1, 0), &mut recorder)
            .unwrap();

        assert!(!result.changed);
        assert!(result.goal_reached);
        assert_eq!(recorder.events, [Event::Goal]);
        assert_eq!(board.grid(), &before);
    }

    #[test]
    fn test_productive_swaps() {
        let board = engine(CASCADE, 4, 100, CASCADE_SCRIPT);
        let swaps = board.productive_swaps();
        assert!(swaps.contains(&(Position::new(2, 0), Position::new(3, 0))));
        for (a, b) in swaps {
            assert!(a.is_adjacent(b));
            let mut grid = board.grid().clone();
            grid.swap(a, b);
            assert!(!find_matches(&grid).is_empty());
        }

        // Every symbol is distinct, so no swap can line up three.
        let distinct = engine("GHI\nDEF\nABC", 9, 100, "A");
        assert!(distinct.productive_swaps().is_empty());
    }

    #[test]
    fn test_symbol_at_and_bounds() {
        let engine = engine("AB\nBA", 2, 100, "A");
        assert_eq!(engine.symbol_at(Position::new(0, 0)), Some(SymbolId::new(1)));
        assert_eq!(engine.symbol_at(Position::new(2, 0)), None);
        assert!(engine.is_valid_position(Position::new(1, 1)));
        assert!(!engine.is_valid_position(Position::new(-1, 1)));
    }

    proptest! {
        #[test]
        fn prop_swaps_preserve_invariants(
            seed in any::<[u8; 32]>(),
            swaps in prop::collection::vec((0..6i32, 0..6i32, 0..4usize), 1..24),
        ) {
            let config = BoardConfig::new(6, Palette::with_size(4).unwrap())
                .with_score_goal(u64::MAX);
            let mut engine = BoardEngine::with_seed(&config, BoardSeed::from_bytes(seed)).unwrap();
            let mut total_cleared = 0;

            for (column, row, direction) in swaps {
                let (dc, dr) = [(1, 0), (-1, 0), (0, 1), (0, -1)][direction];
                let a = Position::new(column, row);
                let b = a.offset(dc, dr);
                let before = engine.grid().clone();
                let score_before = engine.score();

                match engine.try_swap(a, b) {
                    Ok(result) => {
                        total_cleared += result.tiles_cleared;
                        prop_assert_eq!(result.changed, result.tiles_cleared > 0);
                        prop_assert_eq!(engine.score() - score_before, result.score_delta);
                        if !result.changed {
                            prop_assert_eq!(engine.grid(), &before);
                        }
                    }
                    Err(EngineError::OutOfBounds { position, .. }) => {
                        prop_assert!(!engine.is_valid_position(position));
                        prop_assert_eq!(engine.grid(), &before);
                    }
                    Err(err) => prop_assert!(false, "unexpected error: {}", err),
                }

                prop_assert!(engine.grid().is_settled());
                prop_assert_eq!(engine.grid().empty_count(), 0);
                prop_assert!(find_matches(engine.grid()).is_empty());
                prop_assert_eq!(engine.score(), TILE_REWARD * total_cleared as u64);
                let palette = engine.palette();
                let in_palette = engine
                    .grid()
                    .cells()
                    .all(|cell| cell.as_symbol().is_some_and(|symbol| palette.contains(symbol)));
                prop_assert!(in_palette);
            }
        }
    }
}
