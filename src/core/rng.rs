//! Injectable randomness for deck draws and strategy choices.
//!
//! The engine only needs two operations, captured by [`RandomSource`]:
//!
//! - a uniform pick from a shrinking finite pool (`pick_index`)
//! - a weighted binary choice (`weighted_choice`)
//!
//! ## Sources
//!
//! - [`GameRng`]: seeded ChaCha8 with independent context streams, so the
//!   deck and every player's strategy draw from separate sequences.
//! - [`SequenceRng`]: scripted answers for golden traces and replays.
//!
//! ```
//! use temple_expedition::core::{GameRng, RandomSource};
//!
//! let master = GameRng::new(42);
//! let mut deck = master.for_context("deck");
//! let mut again = GameRng::new(42).for_context("deck");
//!
//! assert_eq!(deck.pick_index(31), again.pick_index(31));
//! ```

use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

/// Randomness collaborator used by the round engine and strategies.
pub trait RandomSource {
    /// Uniform index in `0..len`.
    ///
    /// Callers check the answer; anything `>= len` (including the 0 returned
    /// for an empty pool) is rejected as a broken source.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Choose between two options with the given weights.
    ///
    /// Returns `true` for the first option. Weights need not sum to 1; a
    /// non-positive total picks the second option.
    fn weighted_choice(&mut self, first: f64, second: f64) -> bool;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }

    fn weighted_choice(&mut self, first: f64, second: f64) -> bool {
        (**self).weighted_choice(first, second)
    }
}

/// Deterministic ChaCha8 RNG.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent branch, deterministic in the fork count.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Independent stream for a named context ("deck", "strategy/2", ...).
    ///
    /// The same context always yields the same stream for the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Random boolean with the given probability of `true`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Capture the generator position for checkpoints.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl RandomSource for GameRng {
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.inner.gen_range(0..len)
    }

    fn weighted_choice(&mut self, first: f64, second: f64) -> bool {
        let first = first.max(0.0);
        let total = first + second.max(0.0);
        if total <= 0.0 {
            return false;
        }
        self.gen_bool(first / total)
    }
}

/// Serializable generator position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
    pub fork_counter: u64,
}

/// Scripted random source.
///
/// Answers come from queues; an exhausted index queue picks 0 (the front
/// of the pool), an exhausted choice queue picks the heavier option.
#[derive(Clone, Debug, Default)]
pub struct SequenceRng {
    indices: VecDeque<usize>,
    choices: VecDeque<bool>,
}

impl SequenceRng {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue pool indices; each is reduced modulo the pool length when used.
    #[must_use]
    pub fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(indices);
        self
    }

    /// Queue binary choices (`true` = first option).
    #[must_use]
    pub fn with_choices(mut self, choices: impl IntoIterator<Item = bool>) -> Self {
        self.choices.extend(choices);
        self
    }

    /// Remaining scripted answers (indices, choices).
    #[must_use]
    pub fn remaining(&self) -> (usize, usize) {
        (self.indices.len(), self.choices.len())
    }
}

impl RandomSource for SequenceRng {
    fn pick_index(&mut self, len: usize) -> usize {
        match self.indices.pop_front() {
            Some(i) if len > 0 => i % len,
            _ => 0,
        }
    }

    fn weighted_choice(&mut self, first: f64, second: f64) -> bool {
        self.choices.pop_front().unwrap_or(first >= second)
    }
}
