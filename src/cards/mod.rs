//! The card universe: card values, the per-round deck, and the temple.
//!
//! ## Key Types
//!
//! - `Card`: immutable treasure, hazard, or special treasure
//! - `CardPool`: fixed base pool plus the special-treasure unlock schedule
//! - `Deck`: face-down cards of the current round, drawn without replacement
//! - `Temple`: face-up cards of the current round, in reveal order
//!
//! Within a round every card of the pool is in exactly one of `Deck` and
//! `Temple`.

pub mod card;
pub mod deck;
pub mod temple;

pub use card::{Card, CardKind, HazardLevel};
pub use deck::{CardPool, Deck, DeckComposition, HAZARD_COPIES, SPECIAL_VALUES, TREASURE_VALUES};
pub use temple::{Reveal, Temple};
