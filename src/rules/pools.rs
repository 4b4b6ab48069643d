//! Round-carry pools and the integer splits that feed them.

use serde::{Deserialize, Serialize};

/// Treasure waiting in the temple, reset every round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPools {
    /// Remainders of uneven splits, claimed by later retreats.
    pub path_treasure: u32,
    /// Special treasure revealed but not yet claimed by a lone retreater.
    pub unclaimed_special: u32,
}

impl RoundPools {
    #[must_use]
    pub fn total(&self) -> u32 {
        self.path_treasure + self.unclaimed_special
    }

    /// Empty both pools, returning what they held.
    pub fn drain(&mut self) -> u32 {
        let total = self.total();
        *self = Self::default();
        total
    }
}

/// Even split of `value` among `parts`: `(share, remainder)` with
/// `share * parts + remainder == value`.
///
/// `parts` must be non-zero.
#[must_use]
pub fn split(value: u32, parts: usize) -> (u32, u32) {
    debug_assert!(parts > 0, "split among zero players");
    let parts = parts as u32;
    (value / parts, value % parts)
}
