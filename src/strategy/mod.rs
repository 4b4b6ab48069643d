//! Player decision strategies.
//!
//! Every exploring player is asked once per step whether to keep going.
//! Strategies are trait-based so the engine never cares who is deciding:
//!
//! - [`FixedOdds`]: explores with a fixed probability, blind to the table
//! - [`RiskAdjusted`]: weighs hazard risk against the treasure still in play
//! - [`Interactive`]: asks an external [`InputSource`] (a human or a script)
//!
//! Strategies receive a read-only [`DecisionContext`]; only the engine
//! mutates players. Each randomised strategy owns its own random source,
//! so the order in which players are asked never changes an outcome.

pub mod fixed_odds;
pub mod interactive;
pub mod risk_adjusted;

pub use fixed_odds::FixedOdds;
pub use interactive::{InputSource, Interactive, ReaderInput, ScriptedInput, EXPLORE_TOKEN};
pub use risk_adjusted::RiskAdjusted;

use serde::{Deserialize, Serialize};

use crate::cards::{CardPool, Temple};
use crate::core::{Decision, ExpeditionConfig, ExpeditionError, GameRng, PlayerId, Result};

/// Read-only view handed to a strategy for one decision.
#[derive(Clone, Copy, Debug)]
pub struct DecisionContext<'a> {
    pub round: u8,
    pub step: u32,
    pub player: PlayerId,
    pub name: &'a str,
    /// Treasure the player carries this round, lost on a bust.
    pub round_treasure: u32,
    /// Treasure already banked in camp.
    pub total_treasure: u32,
    /// Players still exploring as this step begins, the asker included.
    pub exploring: usize,
    pub temple: &'a Temple,
    pub pool: &'a CardPool,
    /// Size of this round's full card pool (deck plus temple).
    pub pool_size: usize,
}

/// A decision-maker bound to one player.
pub trait Strategy: Send {
    /// Stable identifier for logs.
    fn name(&self) -> &'static str;

    /// Choose to explore or retreat.
    fn decide(&mut self, ctx: &DecisionContext<'_>) -> Result<Decision>;
}

/// Built-in strategy selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    FixedOdds,
    RiskAdjusted,
    Interactive,
}

impl StrategyKind {
    /// Construct the strategy for `player`.
    ///
    /// `rng` should be the player's own stream; `input` is consumed only by
    /// `Interactive`, which fails with `MissingInput` when it is absent.
    pub fn build(
        self,
        player: PlayerId,
        config: &ExpeditionConfig,
        rng: GameRng,
        input: Option<Box<dyn InputSource>>,
    ) -> Result<Box<dyn Strategy>> {
        Ok(match self {
            StrategyKind::FixedOdds => Box::new(FixedOdds::new(config.explore_odds, rng)),
            StrategyKind::RiskAdjusted => Box::new(
                RiskAdjusted::new(rng)
                    .with_risk_factor(config.risk_factor)
                    .with_treasure_discount(config.treasure_discount),
            ),
            StrategyKind::Interactive => {
                let input = input.ok_or(ExpeditionError::MissingInput { player })?;
                Box::new(Interactive::new(input))
            }
        })
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StrategyKind::FixedOdds => FixedOdds::<GameRng>::NAME,
            StrategyKind::RiskAdjusted => RiskAdjusted::<GameRng>::NAME,
            StrategyKind::Interactive => Interactive::NAME,
        };
        f.write_str(name)
    }
}
