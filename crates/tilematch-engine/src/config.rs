use tilematch_core::{ConfigError, Palette};

use crate::MIN_RUN;

/// Parameters of a board.
///
/// # Examples
///
/// ```
/// use tilematch_core::Palette;
/// use tilematch_engine::BoardConfig;
///
/// let config = BoardConfig::new(6, Palette::with_size(4)?).with_score_goal(500);
/// assert_eq!(config.dimension(), 6);
/// assert_eq!(config.score_goal(), 500);
/// assert!(config.validate().is_ok());
///
/// let default = BoardConfig::default();
/// assert_eq!(default.dimension(), 8);
/// assert_eq!(default.palette().size(), 5);
/// assert_eq!(default.score_goal(), 100);
/// # Ok::<(), tilematch_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    dimension: usize,
    palette: Palette,
    score_goal: u64,
}

impl BoardConfig {
    /// Dimension used by [`BoardConfig::default`].
    pub const DEFAULT_DIMENSION: usize = 8;
    /// Score goal used when none is set.
    pub const DEFAULT_SCORE_GOAL: u64 = 100;

    /// Creates a configuration with the default score goal.
    #[must_use]
    pub fn new(dimension: usize, palette: Palette) -> Self {
        Self {
            dimension,
            palette,
            score_goal: Self::DEFAULT_SCORE_GOAL,
        }
    }

    /// Sets the score at which the goal is reached.
    #[must_use]
    pub fn with_score_goal(mut self, score_goal: u64) -> Self {
        self.score_goal = score_goal;
        self
    }

    /// Returns the number of rows and columns.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the symbols tiles are drawn from.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Returns the score at which the goal is reached.
    #[must_use]
    pub fn score_goal(&self) -> u64 {
        self.score_goal
    }

    /// Checks that the configuration describes a playable board.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroDimension`] if the dimension is zero.
    /// - [`ConfigError::DimensionTooLarge`] if the dimension does not fit a
    ///   board coordinate.
    /// - [`ConfigError::SingleSymbolPalette`] if the palette has one symbol and
    ///   a run fits on the board, since no cascade could ever settle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if i32::try_from(self.dimension).is_err() {
            return Err(ConfigError::DimensionTooLarge {
                dimension: self.dimension,
            });
        }
        if self.palette.size() == 1 && self.dimension >= MIN_RUN {
            return Err(ConfigError::SingleSymbolPalette {
                dimension: self.dimension,
            });
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIMENSION, Palette::default())
    }
}
