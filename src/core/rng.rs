//! Deterministic random number generation.
//!
//! Every source of randomness in the hub (puzzle shuffles, card and question
//! order, score ids) goes through `GameRng`, so a fixed seed reproduces a
//! whole session.
//!
//! ```
//! use game_hub::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork for a new session
//! let mut session_rng = rng.fork();
//!
//! // Same seed and fork count give the same stream
//! let mut rng2 = GameRng::new(42);
//! let mut session_rng2 = rng2.fork();
//! assert_eq!(session_rng.gen_range_usize(0..100), session_rng2.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Alphabet for score ids (base 36, lowercase).
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of generated score ids.
pub const ID_LEN: usize = 9;

/// Deterministic RNG with forking.
///
/// Uses ChaCha8 for speed. Not suitable for anything security related.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Generate a short lowercase base-36 identifier.
    pub fn gen_id(&mut self) -> String {
        (0..ID_LEN)
            .map(|_| {
                let idx = self.inner.gen_range(0..ID_ALPHABET.len());
                ID_ALPHABET[idx] as char
            })
            .collect()
    }
}
