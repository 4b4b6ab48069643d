//! Game controller and expedition members.

mod expedition;
mod player;

pub use expedition::{Expedition, GameOutcome};
pub use player::Player;
