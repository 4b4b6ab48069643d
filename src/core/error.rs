//! Error taxonomy for the expedition engine.
//!
//! Two families live here:
//!
//! - **Invariant violations** (`EmptyDeck`, `DrawOutOfRange`, `InvalidCard`,
//!   `ExhaustedPool`):
//!   a construction bug in deck setup or card modelling. These abort the
//!   round and the game and surface to the caller unchanged.
//! - **Setup and collaborator failures** (`InvalidRound`, `RoundFinished`,
//!   `InvalidConfig`, `MissingInput`, `Input`, `Encode`): reported to the
//!   harness.
//!
//! Degenerate probabilities and malformed interactive tokens are not errors;
//! strategies resolve them by policy.

use thiserror::Error;

use super::player::PlayerId;

/// Errors produced by the expedition engine and its collaborators.
#[derive(Debug, Error)]
pub enum ExpeditionError {
    /// A draw was attempted on an empty deck.
    #[error("invariant violation: draw from empty deck (round {round}, step {step})")]
    EmptyDeck { round: u8, step: u32 },

    /// A card was built from an unknown kind tag or an out-of-range hazard level.
    #[error("invariant violation: unrecognised card {kind}({value})")]
    InvalidCard { kind: String, value: u32 },

    /// The random source picked a position outside the deck.
    #[error("invariant violation: draw index {index} out of range for {len} cards")]
    DrawOutOfRange { index: usize, len: usize },

    /// A probability estimate was requested with no undrawn cards left.
    #[error("invariant violation: no undrawn cards (pool {pool_size}, revealed {revealed})")]
    ExhaustedPool { pool_size: usize, revealed: usize },

    /// Round index outside the 1..=5 schedule.
    #[error("round {0} is outside the expedition schedule")]
    InvalidRound(u8),

    /// A step was requested after the round ended.
    #[error("round {0} is already over")]
    RoundFinished(u8),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An interactive strategy was requested without an input collaborator.
    #[error("{player} needs an input source for interactive play")]
    MissingInput { player: PlayerId },

    #[error("input collaborator failed: {0}")]
    Input(#[from] std::io::Error),

    #[error("event log encoding failed: {0}")]
    Encode(String),
}

impl ExpeditionError {
    /// True for errors that indicate a broken card universe rather than a
    /// harness or I/O problem.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            ExpeditionError::EmptyDeck { .. }
                | ExpeditionError::DrawOutOfRange { .. }
                | ExpeditionError::InvalidCard { .. }
                | ExpeditionError::ExhaustedPool { .. }
        )
    }
}

impl From<serde_json::Error> for ExpeditionError {
    fn from(err: serde_json::Error) -> Self {
        ExpeditionError::Encode(err.to_string())
    }
}

impl From<bincode::Error> for ExpeditionError {
    fn from(err: bincode::Error) -> Self {
        ExpeditionError::Encode(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ExpeditionError>;
