use clap::{Parser, Subcommand};
use tilematch_core::{BoardLayout, ConfigError, Palette, WorldPoint};
use tilematch_engine::BoardConfig;
use tilematch_generator::BoardSeed;

/// Play a tile-matching board in the terminal.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Board options.
    #[command(flatten)]
    pub board: BoardArgs,

    /// What to do with the board.
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Clone, clap::Args)]
pub struct BoardArgs {
    /// Number of rows and columns.
    #[arg(long, value_name = "N", default_value_t = BoardConfig::DEFAULT_DIMENSION, global = true)]
    pub dimension: usize,

    /// Number of distinct symbols, at most 26.
    #[arg(long, value_name = "COUNT", default_value_t = 5, global = true)]
    pub symbols: usize,

    /// Score at which the board is complete.
    #[arg(long, value_name = "SCORE", default_value_t = BoardConfig::DEFAULT_SCORE_GOAL, global = true)]
    pub goal: u64,

    /// Board seed: 64 hex digits, or any phrase to hash. Random if omitted.
    #[arg(long, value_name = "SEED", global = true)]
    pub seed: Option<String>,
}

impl BoardArgs {
    /// Builds and validates the board configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the palette size or dimension is invalid.
    pub fn config(&self) -> Result<BoardConfig, ConfigError> {
        let config = BoardConfig::new(self.dimension, Palette::with_size(self.symbols)?)
            .with_score_goal(self.goal);
        config.validate()?;
        Ok(config)
    }

    /// Returns the requested seed, or a fresh random one.
    #[must_use]
    pub fn seed(&self) -> BoardSeed {
        self.seed
            .as_deref()
            .map_or_else(BoardSeed::random, BoardSeed::parse_or_hash)
    }
}

/// Subcommands of the `tilematch` binary.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Read swaps from standard input.
    ///
    /// Each line holds two cells as `column row column row`. `hint` shows a
    /// productive swap and `quit` ends the session.
    Play {
        /// Read cells as world coordinates of a board centered on the origin.
        #[arg(long)]
        world: bool,

        /// Cell size in world units.
        #[arg(long, value_name = "SIZE", default_value_t = 1.0, requires = "world")]
        spacing: f32,
    },
    /// Play random productive swaps.
    Autoplay {
        /// Maximum number of swaps.
        #[arg(long, value_name = "COUNT", default_value_t = 20)]
        moves: usize,
    },
}

impl Command {
    /// Returns the world layout for `play --world`, if requested.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositiveSpacing`] for an invalid spacing.
    pub fn layout(&self, dimension: usize) -> Result<Option<BoardLayout>, ConfigError> {
        match *self {
            Self::Play {
                world: true,
                spacing,
            } => BoardLayout::new(WorldPoint::default(), dimension, spacing).map(Some),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["tilematch", "play"]).unwrap();
        let config = args.board.config().unwrap();
        assert_eq!(config, BoardConfig::default());
        assert!(args.command.layout(config.dimension()).unwrap().is_none());
    }

    #[test]
    fn test_board_options_after_subcommand() {
        let args = Args::try_parse_from([
            "tilematch",
            "autoplay",
            "--moves",
            "3",
            "--dimension",
            "5",
            "--symbols",
            "4",
            "--seed",
            "demo",
        ])
        .unwrap();
        assert!(matches!(args.command, Command::Autoplay { moves: 3 }));
        assert_eq!(args.board.config().unwrap().dimension(), 5);
        assert_eq!(args.board.seed(), BoardSeed::from_phrase("demo"));
    }

    #[test]
    fn test_invalid_board_options() {
        let args = Args::try_parse_from(["tilematch", "play", "--symbols", "27"]).unwrap();
        assert!(matches!(
            args.board.config(),
            Err(ConfigError::PaletteTooLarge { len: 27, .. })
        ));

        let args = Args::try_parse_from(["tilematch", "play", "--symbols", "1"]).unwrap();
        assert!(matches!(
            args.board.config(),
            Err(ConfigError::SingleSymbolPalette { dimension: 8 })
        ));
    }

    #[test]
    fn test_world_layout() {
        let args = Args::try_parse_from(["tilematch", "play", "--world", "--spacing", "2"]).unwrap();
        let layout = args.command.layout(4).unwrap().unwrap();
        assert_eq!(layout.spacing(), 2.0);
        assert_eq!(layout.dimension(), 4);

        let args = Args::try_parse_from(["tilematch", "play", "--world", "--spacing", "0"]).unwrap();
        assert_eq!(args.command.layout(4), Err(ConfigError::NonPositiveSpacing));
    }
}
