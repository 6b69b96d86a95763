//! Deterministic shuffling.
//!
//! Reshuffling a discard pile into an empty draw pile is the only source of
//! randomness in the engine. A seeded ChaCha8 stream keeps games replayable.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used for deck shuffles.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_shuffle() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b = a.clone();

        GameRng::new(7).shuffle(&mut a);
        GameRng::new(7).shuffle(&mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut cards: Vec<u32> = (0..10).collect();
        GameRng::new(1).shuffle(&mut cards);
        cards.sort_unstable();
        assert_eq!(cards, (0..10).collect::<Vec<_>>());
    }
}
