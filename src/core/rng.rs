//! The combat's single source of randomness.
//!
//! Shuffles, reshuffles, random blessing targets and loot rolls all draw
//! from one `GameRng` owned by the `CombatState`. Inject a seeded one and
//! the whole combat replays identically:
//!
//! ```
//! use forge_combat::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut deck_a = vec![1, 2, 3, 4, 5];
//! let mut deck_b = deck_a.clone();
//! a.shuffle(&mut deck_a);
//! b.shuffle(&mut deck_b);
//!
//! assert_eq!(deck_a, deck_b);
//! assert_eq!(a.roll_chance(0.5), b.roll_chance(0.5));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the operating system. The drawn seed is kept and logged
    /// at combat start, so a production combat can still be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// True with probability `chance`, clamped to `0.0..=1.0`. NaN counts
    /// as 0.
    ///
    /// A chance of exactly 0 or 1 still advances the stream.
    pub fn roll_chance(&mut self, chance: f64) -> bool {
        let chance = if chance.is_nan() { 0.0 } else { chance.clamp(0.0, 1.0) };
        self.inner.gen_bool(chance)
    }

    /// Shuffle a pile in place.
    pub fn shuffle<T>(&mut self, cards: &mut [T]) {
        use rand::seq::SliceRandom;
        cards.shuffle(&mut self.inner);
    }

    /// Uniform index into `len` items, `None` when there are none.
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.inner.gen_range(0..len))
    }
}
