//! One round of the expedition, step by step.
//!
//! ## Step loop
//!
//! ```text
//! Collecting -> Settling -> Drawing -> Resolving -> Collecting | RoundOver
//! ```
//!
//! - **Collecting**: every exploring player decides. Nothing changes until
//!   all decisions are in, so asking order never matters.
//! - **Settling**: a lone retreater takes their carried treasure plus both
//!   pools. A group of retreaters splits only the path treasure, leaving the
//!   remainder on the path and the special treasure where it is.
//! - **Drawing**: one card leaves the deck for the temple.
//! - **Resolving**: treasure is split among the explorers with the remainder
//!   on the path; a repeated hazard busts every explorer; a special treasure
//!   waits for a lone retreater.
//!
//! The round ends after the step that leaves nobody exploring, or on a bust.
//! Whatever is still in the pools at that point is forfeited.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, error, info};

use super::pools::{split, RoundPools};
use crate::cards::{Card, CardPool, Deck, HazardLevel, Reveal, Temple};
use crate::core::{Decision, ExpeditionError, PlayerId, PlayerMap, RandomSource, Result};
use crate::events::{EventSink, StepRecord};
use crate::game::Player;

/// Per-seat collection sized for a full table without allocating.
pub type Seats<T> = SmallVec<[T; 8]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    Collecting,
    Settling,
    Drawing,
    Resolving,
    RoundOver,
}

/// What happened during one step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    pub step: u32,
    pub decisions: Seats<(PlayerId, Decision)>,
    /// Amount each retreating player banked.
    pub claims: Seats<(PlayerId, u32)>,
    pub card: Card,
    /// Level of the repeated hazard, if this step busted the round.
    pub bust: Option<HazardLevel>,
    pub busted: Seats<PlayerId>,
    /// Treasure revealed with nobody left inside to take it.
    pub forfeited: u32,
    pub round_over: bool,
}

/// Outcome of a finished round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u8,
    pub steps: u32,
    /// Every card revealed, in order.
    pub revealed: Vec<Card>,
    pub bust: Option<HazardLevel>,
    pub busted: Vec<PlayerId>,
    /// Treasure each player moved into camp this round.
    pub banked: PlayerMap<u32>,
    /// Carried treasure wiped out by the bust.
    pub lost_to_bust: u32,
    /// Treasure nobody claimed: unclaimed reveals and leftover pools.
    pub forfeited: u32,
}

/// Drives one round over a shared roster.
///
/// The engine is the only writer of players, deck, temple, and pools.
pub struct RoundEngine<'a, R: ?Sized, L: ?Sized> {
    round: u8,
    pool: &'a CardPool,
    pool_size: usize,
    players: &'a mut PlayerMap<Player>,
    deck: Deck,
    temple: Temple,
    pools: RoundPools,
    phase: RoundPhase,
    step: u32,
    rng: &'a mut R,
    sink: &'a mut L,
    banked: PlayerMap<u32>,
    lost_to_bust: u32,
    forfeited: u32,
    bust: Option<HazardLevel>,
    busted: Vec<PlayerId>,
    revealed: Vec<Card>,
}

impl<'a, R, L> RoundEngine<'a, R, L>
where
    R: RandomSource + ?Sized,
    L: EventSink + ?Sized,
{
    /// Start `round` with the standard deck for that round.
    pub fn new(
        round: u8,
        pool: &'a CardPool,
        players: &'a mut PlayerMap<Player>,
        rng: &'a mut R,
        sink: &'a mut L,
    ) -> Result<Self> {
        let deck = pool.round_deck(round)?;
        Ok(Self::with_deck(pool, deck, players, rng, sink))
    }

    /// Start a round over an explicit deck.
    ///
    /// The deck's contents define the round's card pool.
    pub fn with_deck(
        pool: &'a CardPool,
        deck: Deck,
        players: &'a mut PlayerMap<Player>,
        rng: &'a mut R,
        sink: &'a mut L,
    ) -> Self {
        let round = deck.round();
        let player_count = players.player_count();
        for (_, player) in players.iter_mut() {
            player.begin_round();
        }
        info!(round, deck = deck.len(), players = player_count, "round begins");

        Self {
            round,
            pool,
            pool_size: deck.len(),
            players,
            deck,
            temple: Temple::new(),
            pools: RoundPools::default(),
            phase: RoundPhase::Collecting,
            step: 0,
            rng,
            sink,
            banked: PlayerMap::with_value(player_count, 0),
            lost_to_bust: 0,
            forfeited: 0,
            bust: None,
            busted: Vec::new(),
            revealed: Vec::new(),
        }
    }

    #[must_use]
    pub fn round(&self) -> u8 {
        self.round
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == RoundPhase::RoundOver
    }

    /// Steps completed so far.
    #[must_use]
    pub fn steps(&self) -> u32 {
        self.step
    }

    #[must_use]
    pub fn pools(&self) -> RoundPools {
        self.pools
    }

    #[must_use]
    pub fn temple(&self) -> &Temple {
        &self.temple
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Size of this round's full card pool.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        self.players
    }

    #[must_use]
    pub fn exploring_count(&self) -> usize {
        self.players.values().filter(|p| p.is_exploring()).count()
    }

    fn exploring_ids(&self) -> Seats<PlayerId> {
        self.players
            .iter()
            .filter(|(_, p)| p.is_exploring())
            .map(|(id, _)| id)
            .collect()
    }

    /// Run one full step.
    pub fn step(&mut self) -> Result<StepReport> {
        if self.is_over() {
            return Err(ExpeditionError::RoundFinished(self.round));
        }

        self.phase = RoundPhase::Collecting;
        let decisions = self.collect()?;

        self.phase = RoundPhase::Settling;
        let retreating: Seats<PlayerId> = decisions
            .iter()
            .filter(|(_, decision)| !decision.is_explore())
            .map(|&(id, _)| id)
            .collect();
        let claims = self.settle(&retreating);

        self.phase = RoundPhase::Drawing;
        let card = match self.deck.draw(&mut *self.rng) {
            Ok(card) => card,
            Err(err) => {
                error!(round = self.round, step = self.step, %err, "round aborted");
                return Err(err);
            }
        };
        let reveal = self.temple.reveal(card);
        debug!(round = self.round, step = self.step, %card, "card revealed");

        self.phase = RoundPhase::Resolving;
        let mut report = StepReport {
            step: self.step,
            decisions,
            claims,
            card,
            bust: None,
            busted: Seats::new(),
            forfeited: 0,
            round_over: false,
        };
        self.resolve(card, reveal, &mut report);

        self.step += 1;
        report.round_over = report.bust.is_some() || self.exploring_count() == 0;
        self.emit(&report);

        if report.round_over {
            self.finish();
        } else {
            self.phase = RoundPhase::Collecting;
        }
        Ok(report)
    }

    /// Step until the round is over.
    pub fn run(mut self) -> Result<RoundSummary> {
        while !self.is_over() {
            self.step()?;
        }
        Ok(self.summary())
    }

    /// Summary of the round so far; complete once the round is over.
    #[must_use]
    pub fn summary(&self) -> RoundSummary {
        let revealed = if self.is_over() {
            self.revealed.clone()
        } else {
            self.temple.cards().copied().collect()
        };

        RoundSummary {
            round: self.round,
            steps: self.step,
            revealed,
            bust: self.bust,
            busted: self.busted.clone(),
            banked: self.banked.clone(),
            lost_to_bust: self.lost_to_bust,
            forfeited: self.forfeited,
        }
    }

    fn collect(&mut self) -> Result<Seats<(PlayerId, Decision)>> {
        let exploring = self.exploring_count();
        let mut decisions = Seats::new();

        for (id, player) in self.players.iter_mut() {
            if !player.is_exploring() {
                continue;
            }
            let decision = player.decide(
                id,
                self.round,
                self.step,
                exploring,
                &self.temple,
                self.pool,
                self.pool_size,
            )?;
            decisions.push((id, decision));
        }

        Ok(decisions)
    }

    fn settle(&mut self, retreating: &[PlayerId]) -> Seats<(PlayerId, u32)> {
        let mut claims = Seats::new();

        match retreating {
            [] => {}
            [lone] => {
                let extra = self.pools.drain();
                claims.push((*lone, self.players[*lone].bank(extra)));
            }
            group => {
                let (share, remainder) = split(self.pools.path_treasure, group.len());
                self.pools.path_treasure = remainder;
                for &id in group {
                    claims.push((id, self.players[id].bank(share)));
                }
            }
        }

        for &(id, claim) in &claims {
            self.banked[id] += claim;
            debug!(
                player = %id,
                claim,
                total = self.players[id].total_treasure(),
                "retreated to camp"
            );
        }
        claims
    }

    fn resolve(&mut self, card: Card, reveal: Reveal, report: &mut StepReport) {
        match card {
            Card::Treasure(value) => {
                let exploring = self.exploring_ids();
                if exploring.is_empty() {
                    self.forfeited += value;
                    report.forfeited = value;
                    debug!(value, "treasure revealed with nobody left to take it");
                    return;
                }

                let (share, remainder) = split(value, exploring.len());
                for id in exploring {
                    self.players[id].add_round_treasure(share);
                }
                self.pools.path_treasure += remainder;
            }
            Card::Hazard(_) => {
                if let Reveal::RepeatHazard(level) = reveal {
                    for id in self.exploring_ids() {
                        self.lost_to_bust += self.players[id].bust();
                        report.busted.push(id);
                    }
                    self.busted.extend(report.busted.iter().copied());
                    self.bust = Some(level);
                    report.bust = Some(level);
                    info!(
                        round = self.round,
                        hazard = level.name(),
                        busted = report.busted.len(),
                        "hazard repeated, expedition busts"
                    );
                }
            }
            Card::SpecialTreasure(value) => {
                self.pools.unclaimed_special += value;
            }
        }
    }

    fn emit(&mut self, report: &StepReport) {
        let retreated = report
            .claims
            .iter()
            .map(|&(id, _)| (id, self.players[id].total_treasure()))
            .collect();

        let record = StepRecord {
            round: self.round,
            step: report.step,
            names: self.players.map(|_, p| p.name().to_string()),
            totals: self.players.map(|_, p| p.total_treasure()),
            deck: self.deck.composition(),
            exploring: self.players.map(|_, p| p.is_exploring()),
            retreated,
            card: report.card,
            temple: self.temple.snapshot(),
            bust: report.bust.is_some(),
        };
        self.sink.record(record);
    }

    fn finish(&mut self) {
        self.forfeited += self.pools.drain();
        self.revealed = self.temple.cards().copied().collect();
        self.temple.clear();
        self.phase = RoundPhase::RoundOver;

        info!(
            round = self.round,
            steps = self.step,
            bust = self.bust.is_some(),
            forfeited = self.forfeited,
            "round over"
        );
    }
}
