//! Parsing of player input lines.

use std::num::{ParseFloatError, ParseIntError};

use tilematch_core::{BoardLayout, Position, WorldPoint};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Request {
    /// Swap the tiles at two positions.
    Swap(Position, Position),
    /// Show a productive swap.
    Hint,
    /// End the session.
    Quit,
    /// A blank line.
    Nothing,
}

/// Errors from [`MoveReader::parse`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// The line does not hold exactly four numbers.
    #[display("expected four numbers `column row column row`, found {count} values")]
    WrongArity {
        /// Number of values found.
        count: usize,
    },
    /// A value is not a grid coordinate.
    #[display("`{token}` is not a whole number")]
    InvalidInteger {
        /// The offending token.
        token: String,
    },
    /// A value is not a world coordinate.
    #[display("`{token}` is not a number")]
    InvalidNumber {
        /// The offending token.
        token: String,
    },
}

/// Turns input lines into [`Request`]s.
///
/// In grid mode the four numbers are `column row column row`. In world mode
/// they are `x y x y` and are mapped through a [`BoardLayout`]. Positions are
/// not bounds-checked here; the engine rejects cells off the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveReader {
    /// Integer grid positions.
    Grid,
    /// World coordinates on the given layout.
    World(BoardLayout),
}

impl MoveReader {
    /// Parses one input line.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the line is neither a command nor four
    /// numbers.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilematch_cli::{MoveReader, Request};
    /// use tilematch_core::Position;
    ///
    /// assert_eq!(
    ///     MoveReader::Grid.parse("2 0 3 0")?,
    ///     Request::Swap(Position::new(2, 0), Position::new(3, 0)),
    /// );
    /// assert_eq!(MoveReader::Grid.parse("quit")?, Request::Quit);
    /// # Ok::<(), tilematch_cli::InputError>(())
    /// ```
    pub fn parse(&self, line: &str) -> Result<Request, InputError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => return Ok(Request::Nothing),
            [word] if matches!(word.to_ascii_lowercase().as_str(), "q" | "quit" | "exit") => {
                return Ok(Request::Quit);
            }
            [word] if word.eq_ignore_ascii_case("hint") => return Ok(Request::Hint),
            _ => {}
        }
        let &[c1, r1, c2, r2] = tokens.as_slice() else {
            return Err(InputError::WrongArity {
                count: tokens.len(),
            });
        };

        let (a, b) = match self {
            Self::Grid => {
                let [c1, r1, c2, r2] = [c1, r1, c2, r2].map(parse_int);
                (Position::new(c1?, r1?), Position::new(c2?, r2?))
            }
            Self::World(layout) => {
                let [x1, y1, x2, y2] = [c1, r1, c2, r2].map(parse_float);
                (
                    layout.world_to_grid(WorldPoint::new(x1?, y1?)),
                    layout.world_to_grid(WorldPoint::new(x2?, y2?)),
                )
            }
        };
        Ok(Request::Swap(a, b))
    }
}

fn parse_int(token: &str) -> Result<i32, InputError> {
    token.parse().map_err(|_: ParseIntError| InputError::InvalidInteger {
        token: token.to_owned(),
    })
}

fn parse_float(token: &str) -> Result<f32, InputError> {
    token.parse().map_err(|_: ParseFloatError| InputError::InvalidNumber {
        token: token.to_owned(),
    })
}
