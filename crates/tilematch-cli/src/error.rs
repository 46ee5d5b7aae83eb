use std::io;

use tilematch_core::ConfigError;
use tilematch_engine::EngineError;

/// Errors that end a terminal session.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// The board options are invalid.
    #[display("invalid board options: {_0}")]
    Config(#[from] ConfigError),
    /// The engine rejected the board.
    #[display("{_0}")]
    Engine(#[from] EngineError),
    /// Reading input or writing output failed.
    #[display("I/O error: {_0}")]
    Io(#[from] io::Error),
}
