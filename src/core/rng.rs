//! Random target selection.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical targets
//! - **Replayable**: Entropy-seeded generators remember their seed
//! - **Injectable**: The engine draws through `TargetSource`, so tests can
//!   pin the target with `FixedTarget`
//!
//! ```
//! use number_guesser::core::{GameRng, TargetSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut replay = GameRng::new(42);
//!
//! let target = rng.draw_target(100);
//! assert!((1..=100).contains(&target));
//! assert_eq!(target, replay.draw_target(100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of hidden target numbers.
///
/// Implementations must return a value in `[1, max]` for any `max >= 1`.
pub trait TargetSource {
    /// Draw a target uniformly from `[1, max]`.
    fn draw_target(&mut self, max: u32) -> u32;
}

/// Seedable RNG backing target selection.
///
/// Uses ChaCha8 for speed while keeping a high quality stream. Range draws
/// go through `rand`'s uniform sampler, which rejects out-of-zone samples
/// instead of reducing modulo the range, so ranges like `1..=1000` carry
/// no bias.
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

    /// Create an RNG with a random seed.
    ///
    /// The seed is kept so the session can be replayed with `GameRng::new`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in the given inclusive range.
    pub fn gen_range_inclusive(&mut self, range: std::ops::RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }
}

impl TargetSource for GameRng {
    fn draw_target(&mut self, max: u32) -> u32 {
        self.gen_range_inclusive(1..=max.max(1))
    }
}

/// Target source that always yields the same number.
///
/// The value is clamped into `[1, max]` so the engine invariant holds even
/// if the fixed number does not fit the chosen difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedTarget(pub u32);

impl TargetSource for FixedTarget {
    fn draw_target(&mut self, max: u32) -> u32 {
        self.0.clamp(1, max.max(1))
    }
}
