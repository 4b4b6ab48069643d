//! Card values - the immutable pieces of the temple.
//!
//! Three kinds exist and no others:
//!
//! - `Treasure(v)`: split among the players still exploring.
//! - `Hazard(level)`: harmless the first time; a second hazard of the same
//!   level in one round busts everyone still inside.
//! - `SpecialTreasure(v)`: set aside until a lone player retreats.

use serde::{Deserialize, Serialize};

use crate::core::{ExpeditionError, Result};

/// Hazard level in `0..5`. Only used for repeat detection, never scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HazardLevel(u8);

impl HazardLevel {
    /// Number of distinct hazard levels.
    pub const COUNT: usize = 5;

    const NAMES: [&'static str; Self::COUNT] = ["snakes", "spiders", "mummy", "fire", "rockfall"];

    pub fn new(level: u8) -> Result<Self> {
        if (level as usize) < Self::COUNT {
            Ok(Self(level))
        } else {
            Err(ExpeditionError::InvalidCard {
                kind: "hazard".to_string(),
                value: u32::from(level),
            })
        }
    }

    /// Every level in ascending order.
    pub fn all() -> impl Iterator<Item = HazardLevel> {
        (0..Self::COUNT as u8).map(HazardLevel)
    }

    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        Self::NAMES[self.index()]
    }
}

impl TryFrom<u8> for HazardLevel {
    type Error = ExpeditionError;

    fn try_from(level: u8) -> Result<Self> {
        Self::new(level)
    }
}

impl From<HazardLevel> for u8 {
    fn from(level: HazardLevel) -> u8 {
        level.0
    }
}

/// Kind tag of a card, without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardKind {
    Treasure,
    Hazard,
    SpecialTreasure,
}

impl CardKind {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            CardKind::Treasure => "treasure",
            CardKind::Hazard => "hazard",
            CardKind::SpecialTreasure => "specialTreasure",
        }
    }
}

/// A single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Card {
    Treasure(u32),
    Hazard(HazardLevel),
    SpecialTreasure(u32),
}

impl Card {
    /// Build a card from a kind tag and a raw value, as found in stored logs.
    ///
    /// Unknown tags and out-of-range hazard levels are invariant violations.
    pub fn from_parts(kind: &str, value: u32) -> Result<Self> {
        match kind {
            "treasure" => Ok(Card::Treasure(value)),
            "specialTreasure" => Ok(Card::SpecialTreasure(value)),
            "hazard" => u8::try_from(value)
                .map_err(|_| ExpeditionError::InvalidCard {
                    kind: kind.to_string(),
                    value,
                })
                .and_then(HazardLevel::new)
                .map(Card::Hazard),
            _ => Err(ExpeditionError::InvalidCard {
                kind: kind.to_string(),
                value,
            }),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> CardKind {
        match self {
            Card::Treasure(_) => CardKind::Treasure,
            Card::Hazard(_) => CardKind::Hazard,
            Card::SpecialTreasure(_) => CardKind::SpecialTreasure,
        }
    }

    /// Raw value: points for treasure kinds, the level for hazards.
    #[must_use]
    pub fn value(&self) -> u32 {
        match *self {
            Card::Treasure(v) | Card::SpecialTreasure(v) => v,
            Card::Hazard(level) => u32::from(level.level()),
        }
    }

    /// Points this card is worth; zero for hazards.
    #[must_use]
    pub fn points(&self) -> u32 {
        match *self {
            Card::Treasure(v) | Card::SpecialTreasure(v) => v,
            Card::Hazard(_) => 0,
        }
    }

    #[must_use]
    pub fn hazard_level(&self) -> Option<HazardLevel> {
        match *self {
            Card::Hazard(level) => Some(level),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_treasure(&self) -> bool {
        matches!(self, Card::Treasure(_))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Hazard(level) => write!(f, "hazard - {} ({})", level.level(), level.name()),
            _ => write!(f, "{} - {}", self.kind().tag(), self.value()),
        }
    }
}
