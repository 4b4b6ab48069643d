//! The game controller: five rounds over one table.
//!
//! Round `k` plays with the base pool plus the first `k` special
//! treasures. Players are never removed between rounds; final totals are
//! only exposed once all five rounds are done.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::player::Player;
use crate::cards::CardPool;
use crate::core::{
    ExpeditionConfig, ExpeditionError, GameRng, PlayerId, PlayerMap, RandomSource, Result, ROUNDS,
};
use crate::events::{EventLog, EventSink};
use crate::rules::{RoundEngine, RoundSummary};
use crate::strategy::{InputSource, StrategyKind};

/// Final standings after the fifth round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub names: PlayerMap<String>,
    pub totals: PlayerMap<u32>,
    /// Players sharing the highest total.
    pub leaders: Vec<PlayerId>,
    pub rounds: Vec<RoundSummary>,
}

impl GameOutcome {
    #[must_use]
    pub fn total(&self, player: PlayerId) -> u32 {
        self.totals[player]
    }
}

/// Runs a full game over a fixed roster.
pub struct Expedition<R = GameRng, L = EventLog> {
    config: ExpeditionConfig,
    pool: CardPool,
    players: PlayerMap<Player>,
    rng: R,
    log: L,
    rounds: Vec<RoundSummary>,
}

impl<L: EventSink> Expedition<GameRng, L> {
    /// Seat a table as described by `config`.
    ///
    /// The deck draws from the `"deck"` stream of the master seed and each
    /// seat's strategy from its own `"strategy/<seat>"` stream. `input` is
    /// asked for a collaborator for every interactive seat.
    pub fn from_config(
        config: ExpeditionConfig,
        log: L,
        mut input: impl FnMut(PlayerId) -> Option<Box<dyn InputSource>>,
    ) -> Result<Self> {
        config.validate()?;
        let master = GameRng::new(config.seed);

        let players = PlayerId::all(config.player_count)
            .map(|id| {
                let kind = config.strategy_for(id.index()).ok_or_else(|| {
                    ExpeditionError::InvalidConfig("no strategy configured".to_string())
                })?;
                let rng = master.for_context(&format!("strategy/{}", id.index()));
                let source = match kind {
                    StrategyKind::Interactive => input(id),
                    _ => None,
                };
                let strategy = kind.build(id, &config, rng, source)?;
                Ok(Player::new(id.default_name(), strategy))
            })
            .collect::<Result<Vec<_>>>()?;

        let deck_rng = master.for_context("deck");
        Self::new(config, players, deck_rng, log)
    }
}

impl<R: RandomSource, L: EventSink> Expedition<R, L> {
    /// Seat an explicit roster, in seat order.
    pub fn new(config: ExpeditionConfig, players: Vec<Player>, rng: R, log: L) -> Result<Self> {
        let count = players.len();
        let players = PlayerMap::from_vec(players).ok_or_else(|| {
            ExpeditionError::InvalidConfig(format!("cannot seat {count} players"))
        })?;

        Ok(Self {
            config,
            pool: CardPool::standard(),
            players,
            rng,
            log,
            rounds: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ExpeditionConfig {
        &self.config
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn pool(&self) -> &CardPool {
        &self.pool
    }

    /// Summaries of the rounds played so far.
    #[must_use]
    pub fn rounds(&self) -> &[RoundSummary] {
        &self.rounds
    }

    #[must_use]
    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn into_log(self) -> L {
        self.log
    }

    /// Index of the next round to play, `None` once all five are done.
    #[must_use]
    pub fn next_round(&self) -> Option<u8> {
        let next = self.rounds.len() as u8 + 1;
        (next <= ROUNDS).then_some(next)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.next_round().is_none()
    }

    /// Play the next round.
    pub fn play_round(&mut self) -> Result<&RoundSummary> {
        let round = self
            .next_round()
            .ok_or(ExpeditionError::InvalidRound(ROUNDS + 1))?;

        let engine = RoundEngine::new(
            round,
            &self.pool,
            &mut self.players,
            &mut self.rng,
            &mut self.log,
        )?;
        let summary = engine.run().inspect_err(|err| {
            warn!(round, %err, "expedition aborted");
        })?;

        info!(
            round,
            totals = ?self.players.values().map(Player::total_treasure).collect::<Vec<_>>(),
            "standings"
        );
        self.rounds.push(summary);
        Ok(&self.rounds[self.rounds.len() - 1])
    }

    /// Play every remaining round and report the final standings.
    pub fn play_game(&mut self) -> Result<GameOutcome> {
        while !self.is_finished() {
            self.play_round()?;
        }
        self.outcome()
            .ok_or(ExpeditionError::InvalidRound(self.rounds.len() as u8))
    }

    /// Final standings, available only after the fifth round.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.is_finished() {
            return None;
        }

        let totals = self.players.map(|_, p| p.total_treasure());
        let best = totals.values().copied().max().unwrap_or(0);
        let leaders = totals
            .iter()
            .filter(|(_, &total)| total == best)
            .map(|(id, _)| id)
            .collect();

        Some(GameOutcome {
            names: self.players.map(|_, p| p.name().to_string()),
            totals,
            leaders,
            rounds: self.rounds.clone(),
        })
    }
}
