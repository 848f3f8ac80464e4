//! Deterministic random number generation for deck shuffling.
//!
//! - **Deterministic**: Same seed produces identical deck orders
//! - **Context streams**: Independent sequences per purpose (one per player's deck)
//!
//! ```
//! use sanguine::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut red = rng.for_context("red-deck");
//! let mut blue = rng.for_context("blue-deck");
//!
//! let mut a = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let mut b = a.clone();
//! red.shuffle(&mut a);
//! blue.shuffle(&mut b);
//! // Same seed, same context: same order every time.
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic RNG backed by ChaCha8.
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

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
