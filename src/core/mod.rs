//! Core building blocks: seats, randomness, configuration, decisions, errors.
//!
//! Nothing here knows about cards or rounds; the card universe lives in
//! `cards` and the step loop in `rules`.

pub mod config;
pub mod decision;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{ExpeditionConfig, ROUNDS};
pub use decision::Decision;
pub use error::{ExpeditionError, Result};
pub use player::{PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::{GameRng, GameRngState, RandomSource, SequenceRng};
