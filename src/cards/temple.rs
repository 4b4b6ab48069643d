//! The temple: cards revealed so far this round, in draw order.
//!
//! Backed by `im::Vector` so every step record can carry an O(1) snapshot
//! while the engine keeps appending. Serialized as the plain card list; the
//! hazard mask is rebuilt on the way back in.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, HazardLevel};

/// Outcome of revealing one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    /// Nothing fatal: treasure, special, or a first-seen hazard.
    Safe,
    /// A hazard whose level was already revealed earlier this round.
    RepeatHazard(HazardLevel),
}

/// Ordered history of revealed cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Card>", into = "Vec<Card>")]
pub struct Temple {
    cards: Vector<Card>,
    /// Bit `i` set once a hazard of level `i` has been revealed.
    seen_hazards: u8,
}

impl Temple {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card, reporting whether it repeats an earlier hazard.
    pub fn reveal(&mut self, card: Card) -> Reveal {
        let reveal = match card.hazard_level() {
            Some(level) if self.has_hazard(level) => Reveal::RepeatHazard(level),
            Some(level) => {
                self.seen_hazards |= 1 << level.level();
                Reveal::Safe
            }
            None => Reveal::Safe,
        };
        self.cards.push_back(card);
        reveal
    }

    /// Was a hazard of this level already revealed?
    #[must_use]
    pub fn has_hazard(&self, level: HazardLevel) -> bool {
        self.seen_hazards & (1 << level.level()) != 0
    }

    /// Number of distinct hazard levels revealed.
    #[must_use]
    pub fn distinct_hazard_levels(&self) -> usize {
        self.seen_hazards.count_ones() as usize
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// Values of the treasure cards revealed so far (specials excluded).
    pub fn treasure_values(&self) -> impl Iterator<Item = u32> + '_ {
        self.cards.iter().filter_map(|card| match *card {
            Card::Treasure(v) => Some(v),
            _ => None,
        })
    }

    /// Total points of every treasure and special revealed.
    #[must_use]
    pub fn revealed_points(&self) -> u32 {
        self.cards.iter().map(Card::points).sum()
    }

    /// Cheap structural-sharing copy.
    #[must_use]
    pub fn snapshot(&self) -> Temple {
        self.clone()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.seen_hazards = 0;
    }
}

impl From<Vec<Card>> for Temple {
    fn from(cards: Vec<Card>) -> Self {
        let mut temple = Temple::new();
        for card in cards {
            temple.reveal(card);
        }
        temple
    }
}

impl From<Temple> for Vec<Card> {
    fn from(temple: Temple) -> Self {
        temple.cards.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hazard(level: u8) -> Card {
        Card::Hazard(HazardLevel::new(level).unwrap())
    }

    #[test]
    fn test_repeat_detected_across_gap() {
        let mut temple = Temple::new();
        assert_eq!(temple.reveal(Card::Treasure(3)), Reveal::Safe);
        assert_eq!(temple.reveal(hazard(2)), Reveal::Safe);
        assert_eq!(temple.reveal(Card::Treasure(9)), Reveal::Safe);
        assert_eq!(temple.reveal(hazard(1)), Reveal::Safe);
        assert_eq!(temple.reveal(Card::SpecialTreasure(5)), Reveal::Safe);

        let level = HazardLevel::new(2).unwrap();
        assert_eq!(temple.reveal(hazard(2)), Reveal::RepeatHazard(level));
        assert_eq!(temple.len(), 6);
        assert_eq!(temple.last(), Some(&hazard(2)));
    }

    #[test]
    fn test_distinct_levels_and_treasure() {
        let mut temple = Temple::new();
        temple.reveal(hazard(0));
        temple.reveal(hazard(4));
        temple.reveal(Card::Treasure(7));
        temple.reveal(Card::SpecialTreasure(10));

        assert_eq!(temple.distinct_hazard_levels(), 2);
        assert_eq!(temple.treasure_values().collect::<Vec<_>>(), vec![7]);
        assert_eq!(temple.revealed_points(), 17);
    }

    #[test]
    fn test_snapshot_is_isolated() {
        let mut temple = Temple::new();
        temple.reveal(Card::Treasure(1));
        let snapshot = temple.snapshot();

        temple.reveal(hazard(3));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.distinct_hazard_levels(), 0);
        assert_eq!(temple.len(), 2);
    }

    #[test]
    fn test_deserialize_rebuilds_hazard_mask() {
        let temple: Temple =
            serde_json::from_str(r#"[{"treasure":3},{"hazard":1},{"specialTreasure":5}]"#).unwrap();

        assert_eq!(temple.len(), 3);
        assert!(temple.has_hazard(HazardLevel::new(1).unwrap()));
        assert_eq!(temple.distinct_hazard_levels(), 1);

        let mut replay = temple.clone();
        let level = HazardLevel::new(1).unwrap();
        assert_eq!(replay.reveal(hazard(1)), Reveal::RepeatHazard(level));

        let json = serde_json::to_string(&temple).unwrap();
        assert_eq!(json, r#"[{"treasure":3},{"hazard":1},{"specialTreasure":5}]"#);
    }

    #[test]
    fn test_clear_resets_hazards() {
        let mut temple = Temple::new();
        temple.reveal(hazard(1));
        temple.clear();

        assert!(temple.is_empty());
        assert_eq!(temple.reveal(hazard(1)), Reveal::Safe);
    }
}
