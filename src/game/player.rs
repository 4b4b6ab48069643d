//! Expedition members.
//!
//! A `Player` carries two treasure counters: `round_treasure`, at risk
//! inside the temple, and `total_treasure`, banked in camp and never
//! decreasing. Only the round engine moves treasure between them; the bound
//! strategy only ever sees a read-only context.

use crate::cards::{CardPool, Temple};
use crate::core::{Decision, PlayerId, Result};
use crate::strategy::{DecisionContext, Strategy};

pub struct Player {
    name: String,
    total_treasure: u32,
    round_treasure: u32,
    exploring: bool,
    strategy: Box<dyn Strategy>,
}

impl Player {
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            total_treasure: 0,
            round_treasure: 0,
            exploring: false,
            strategy,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Treasure banked in camp across rounds.
    #[must_use]
    pub fn total_treasure(&self) -> u32 {
        self.total_treasure
    }

    /// Treasure carried inside the temple this round.
    #[must_use]
    pub fn round_treasure(&self) -> u32 {
        self.round_treasure
    }

    #[must_use]
    pub fn is_exploring(&self) -> bool {
        self.exploring
    }

    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Enter the temple with empty hands.
    pub(crate) fn begin_round(&mut self) {
        self.round_treasure = 0;
        self.exploring = true;
    }

    pub(crate) fn add_round_treasure(&mut self, amount: u32) {
        self.round_treasure += amount;
    }

    /// Retreat to camp, folding carried treasure plus `extra` into the total.
    ///
    /// Returns the amount banked.
    pub(crate) fn bank(&mut self, extra: u32) -> u32 {
        let claim = self.round_treasure + extra;
        self.total_treasure += claim;
        self.round_treasure = 0;
        self.exploring = false;
        claim
    }

    /// Lose everything carried and leave the temple. Returns the amount lost.
    pub(crate) fn bust(&mut self) -> u32 {
        let lost = self.round_treasure;
        self.round_treasure = 0;
        self.exploring = false;
        lost
    }

    /// Ask the bound strategy for this step's decision.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn decide(
        &mut self,
        id: PlayerId,
        round: u8,
        step: u32,
        exploring: usize,
        temple: &Temple,
        pool: &CardPool,
        pool_size: usize,
    ) -> Result<Decision> {
        let ctx = DecisionContext {
            round,
            step,
            player: id,
            name: &self.name,
            round_treasure: self.round_treasure,
            total_treasure: self.total_treasure,
            exploring,
            temple,
            pool,
            pool_size,
        };
        self.strategy.decide(&ctx)
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("total_treasure", &self.total_treasure)
            .field("round_treasure", &self.round_treasure)
            .field("exploring", &self.exploring)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{Interactive, ScriptedInput};

    fn player() -> Player {
        Player::new("Player 1", Box::new(Interactive::new(Box::new(ScriptedInput::default()))))
    }

    #[test]
    fn test_bank_folds_round_treasure() {
        let mut p = player();
        p.begin_round();
        p.add_round_treasure(6);

        assert_eq!(p.bank(3), 9);
        assert_eq!(p.total_treasure(), 9);
        assert_eq!(p.round_treasure(), 0);
        assert!(!p.is_exploring());
    }

    #[test]
    fn test_bust_keeps_total() {
        let mut p = player();
        p.begin_round();
        p.add_round_treasure(4);
        p.bank(0);

        p.begin_round();
        p.add_round_treasure(11);
        assert_eq!(p.bust(), 11);
        assert_eq!(p.total_treasure(), 4);
        assert_eq!(p.round_treasure(), 0);
    }

    #[test]
    fn test_debug_names_strategy() {
        let debug = format!("{:?}", player());
        assert!(debug.contains("interactive"));
    }
}
