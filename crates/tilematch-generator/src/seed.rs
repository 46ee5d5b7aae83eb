use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a seeded board.
///
/// Seeds display as 64 lowercase hex digits and parse back from the same form,
/// so a board can be shared and replayed.
///
/// # Examples
///
/// ```
/// use tilematch_generator::BoardSeed;
///
/// let seed = BoardSeed::from_phrase("level 1");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<BoardSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSeed([u8; 32]);

impl BoardSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from the SHA-256 digest of a phrase.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        let mut bytes = [0; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Parses a hex seed, or hashes the text into a seed if it is not hex.
    ///
    /// Convenient for command-line input where both exact seeds and memorable
    /// phrases are accepted.
    #[must_use]
    pub fn parse_or_hash(text: &str) -> Self {
        text.parse().unwrap_or_else(|_| Self::from_phrase(text))
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates the PCG generator this seed stands for.
    #[must_use]
    pub fn to_rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl From<[u8; 32]> for BoardSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// An error while parsing a [`BoardSeed`] from hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The text is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Number of characters in the input.
        len: usize,
    },
    /// The text contains a non-hex character.
    #[display("invalid hex digit {ch:?} in seed")]
    InvalidDigit {
        /// The offending character.
        ch: char,
    },
}

impl FromStr for BoardSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::InvalidLength { len });
        }
        let mut bytes = [0; 32];
        let mut digits = s
            .chars()
            .map(|ch| ch.to_digit(16).ok_or(ParseSeedError::InvalidDigit { ch }));
        for byte in &mut bytes {
            // Length is checked above, so both digits exist.
            let (Some(high), Some(low)) = (digits.next(), digits.next()) else {
                unreachable!("seed length already checked");
            };
            let value = (high? << 4) | low?;
            *byte = u8::try_from(value).unwrap_or(u8::MAX);
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_parse_and_display() {
        let seed: BoardSeed = HEX.parse().unwrap();
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
        assert_eq!(seed.to_string(), HEX);

        let upper: BoardSeed = HEX.to_uppercase().parse().unwrap();
        assert_eq!(upper, seed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<BoardSeed>(),
            Err(ParseSeedError::InvalidLength { len: 3 })
        );
        let bad = format!("{}z", &HEX[..63]);
        assert_eq!(
            bad.parse::<BoardSeed>(),
            Err(ParseSeedError::InvalidDigit { ch: 'z' })
        );
    }

    #[test]
    fn test_phrase_seeds_are_stable() {
        assert_eq!(BoardSeed::from_phrase("a"), BoardSeed::from_phrase("a"));
        assert_ne!(BoardSeed::from_phrase("a"), BoardSeed::from_phrase("b"));
        // SHA-256("abc")
        assert_eq!(
            BoardSeed::from_phrase("abc").to_string(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_parse_or_hash() {
        assert_eq!(
            BoardSeed::parse_or_hash(HEX),
            HEX.parse::<BoardSeed>().unwrap()
        );
        assert_eq!(
            BoardSeed::parse_or_hash("level 1"),
            BoardSeed::from_phrase("level 1")
        );
    }
}
