//! Round rules: the step loop, settlement, and the carry-over pools.
//!
//! `RoundEngine` owns every write to the round state. Strategies only see
//! read-only snapshots, and the game controller only reads the summary.

pub mod pools;
pub mod round;

pub use pools::{split, RoundPools};
pub use round::{RoundEngine, RoundPhase, RoundSummary, Seats, StepReport};
