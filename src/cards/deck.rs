//! The card pool and the per-round deck.
//!
//! `CardPool` owns the fixed card universe: fifteen treasures, three copies
//! of each of the five hazards, and five special treasures unlocked one per
//! round. `Deck` is the bag of cards still face-down in the current round,
//! drawn without replacement.

use serde::{Deserialize, Serialize};

use super::card::{Card, HazardLevel};
use crate::core::{ExpeditionError, RandomSource, Result, ROUNDS};

/// Treasure card values in the base pool.
pub const TREASURE_VALUES: [u32; 15] = [1, 2, 3, 4, 5, 5, 7, 7, 9, 11, 11, 13, 14, 15, 17];

/// Copies of each hazard level in the base pool.
pub const HAZARD_COPIES: usize = 3;

/// Special treasure values, the k-th unlocked before round k.
pub const SPECIAL_VALUES: [u32; ROUNDS as usize] = [5, 10, 15, 20, 25];

/// The fixed card universe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardPool {
    treasures: Vec<Card>,
    hazards: Vec<Card>,
    specials: Vec<Card>,
}

impl Default for CardPool {
    fn default() -> Self {
        Self::standard()
    }
}

impl CardPool {
    #[must_use]
    pub fn standard() -> Self {
        let treasures = TREASURE_VALUES.iter().map(|&v| Card::Treasure(v)).collect();
        let hazards = HazardLevel::all()
            .flat_map(|level| std::iter::repeat(Card::Hazard(level)).take(HAZARD_COPIES))
            .collect();
        let specials = SPECIAL_VALUES.iter().map(|&v| Card::SpecialTreasure(v)).collect();

        Self {
            treasures,
            hazards,
            specials,
        }
    }

    /// Every treasure card of the base pool (specials excluded).
    #[must_use]
    pub fn treasure_cards(&self) -> &[Card] {
        &self.treasures
    }

    #[must_use]
    pub fn hazard_cards(&self) -> &[Card] {
        &self.hazards
    }

    /// Treasure plus hazard cards, before any special is unlocked.
    #[must_use]
    pub fn base_size(&self) -> usize {
        self.treasures.len() + self.hazards.len()
    }

    /// Specials available in `round` (1-based, cumulative).
    pub fn specials_for(&self, round: u8) -> Result<&[Card]> {
        Self::check_round(round)?;
        Ok(&self.specials[..round as usize])
    }

    /// Size of the full card pool for `round`.
    pub fn round_size(&self, round: u8) -> Result<usize> {
        Ok(self.base_size() + self.specials_for(round)?.len())
    }

    /// Build the deck for `round`: base pool plus every special unlocked so far.
    pub fn round_deck(&self, round: u8) -> Result<Deck> {
        let specials = self.specials_for(round)?;
        let cards = self
            .treasures
            .iter()
            .chain(&self.hazards)
            .chain(specials)
            .copied()
            .collect();
        Ok(Deck::new(round, cards))
    }

    fn check_round(round: u8) -> Result<()> {
        if (1..=ROUNDS).contains(&round) {
            Ok(())
        } else {
            Err(ExpeditionError::InvalidRound(round))
        }
    }
}

/// Cards still face-down this round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    round: u8,
    cards: Vec<Card>,
    drawn: u32,
}

impl Deck {
    /// A deck holding exactly `cards`, in the given order.
    ///
    /// Order matters only to scripted random sources; draws are uniform.
    #[must_use]
    pub fn new(round: u8, cards: Vec<Card>) -> Self {
        Self {
            round,
            cards,
            drawn: 0,
        }
    }

    #[must_use]
    pub fn round(&self) -> u8 {
        self.round
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards drawn from this deck so far.
    #[must_use]
    pub fn drawn(&self) -> u32 {
        self.drawn
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Remove and return one card chosen uniformly at random.
    ///
    /// An empty deck is an invariant violation: the round always busts or
    /// empties of players long before the pool runs out. So is a source that
    /// answers with a position past the end; the deck is left untouched.
    pub fn draw<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<Card> {
        let len = self.cards.len();
        if len == 0 {
            return Err(ExpeditionError::EmptyDeck {
                round: self.round,
                step: self.drawn,
            });
        }
        let index = rng.pick_index(len);
        if index >= len {
            return Err(ExpeditionError::DrawOutOfRange { index, len });
        }
        self.drawn += 1;
        Ok(self.cards.remove(index))
    }

    /// Summary of what is left, for the event log.
    #[must_use]
    pub fn composition(&self) -> DeckComposition {
        let mut composition = DeckComposition::default();
        for card in &self.cards {
            match *card {
                Card::Treasure(v) => {
                    composition.treasure_cards += 1;
                    composition.treasure_value += v;
                }
                Card::Hazard(level) => composition.hazards[level.index()] += 1,
                Card::SpecialTreasure(v) => {
                    composition.special_cards += 1;
                    composition.special_value += v;
                }
            }
        }
        composition
    }
}

/// Remaining-deck breakdown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckComposition {
    pub treasure_cards: u32,
    pub treasure_value: u32,
    /// Remaining copies per hazard level.
    pub hazards: [u32; HazardLevel::COUNT],
    pub special_cards: u32,
    pub special_value: u32,
}

impl DeckComposition {
    #[must_use]
    pub fn total_cards(&self) -> u32 {
        self.treasure_cards + self.special_cards + self.hazards.iter().sum::<u32>()
    }
}
