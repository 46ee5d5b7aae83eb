use std::fmt::Debug;

use rand::{Rng, seq::IndexedRandom as _};
use rand_pcg::Pcg64;
use tilematch_core::SymbolId;

use crate::BoardSeed;

/// The random capability behind symbol generation.
///
/// Implementations choose one symbol out of a candidate list. The generator
/// decides *which* symbols are allowed; the source only decides *which one* of
/// them is used, so swapping the source never breaks generation rules.
pub trait SymbolSource: Debug + Send {
    /// Picks one of `candidates`.
    ///
    /// `candidates` is never empty. Random sources should pick uniformly.
    fn pick(&mut self, candidates: &[SymbolId]) -> SymbolId;
}

/// A boxed symbol source.
pub type BoxedSymbolSource = Box<dyn SymbolSource>;

/// A [`SymbolSource`] that picks uniformly with a [`rand::Rng`].
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
/// use tilematch_core::SymbolId;
/// use tilematch_generator::{RandomSource, SymbolSource};
///
/// let mut source = RandomSource::new(Pcg64::seed_from_u64(7));
/// let candidates = [SymbolId::new(0), SymbolId::new(3)];
/// let picked = source.pick(&candidates);
/// assert!(candidates.contains(&picked));
/// ```
#[derive(Debug, Clone)]
pub struct RandomSource<R> {
    rng: R,
}

impl<R> RandomSource<R> {
    /// Wraps a random number generator.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSource<Pcg64> {
    /// Creates a source whose picks are fully determined by `seed`.
    #[must_use]
    pub fn from_seed(seed: BoardSeed) -> Self {
        Self::new(seed.to_rng())
    }
}

impl<R> SymbolSource for RandomSource<R>
where
    R: Rng + Debug + Send,
{
    fn pick(&mut self, candidates: &[SymbolId]) -> SymbolId {
        match candidates.choose(&mut self.rng) {
            Some(symbol) => *symbol,
            None => panic!("symbol source called without candidates"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_picks() {
        let seed = BoardSeed::from_phrase("picks");
        let candidates: Vec<_> = (0..6).map(SymbolId::new).collect();
        let mut a = RandomSource::from_seed(seed);
        let mut b = RandomSource::from_seed(seed);
        for _ in 0..64 {
            assert_eq!(a.pick(&candidates), b.pick(&candidates));
        }
    }

    #[test]
    fn test_single_candidate_is_always_picked() {
        let mut source = RandomSource::from_seed(BoardSeed::from_phrase("one"));
        let only = SymbolId::new(4);
        for _ in 0..16 {
            assert_eq!(source.pick(&[only]), only);
        }
    }

    #[test]
    fn test_every_candidate_is_reachable() {
        let mut source = RandomSource::from_seed(BoardSeed::from_phrase("reach"));
        let candidates: Vec<_> = (0..4).map(SymbolId::new).collect();
        let mut seen = [false; 4];
        for _ in 0..512 {
            seen[usize::from(source.pick(&candidates).index())] = true;
        }
        assert_eq!(seen, [true; 4]);
    }
}
