use tilematch_core::{ConfigError, Position};

/// Errors returned by [`BoardEngine`](crate::BoardEngine) operations.
///
/// Neither error leaves a partial change behind: positions are checked before
/// any cell is touched, and configuration is checked before a board exists.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum EngineError {
    /// A swap position lies outside the board.
    #[display("position {position} is outside the {dimension}x{dimension} board")]
    OutOfBounds {
        /// The rejected position.
        position: Position,
        /// Board dimension.
        dimension: usize,
    },
    /// The board configuration cannot produce a playable board.
    #[display("invalid configuration: {_0}")]
    InvalidConfiguration(#[from] ConfigError),
}
