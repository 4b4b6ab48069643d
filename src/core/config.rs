//! Expedition configuration.
//!
//! The card universe and the five-round schedule are fixed; configuration
//! covers the table (seats and their strategies), the master seed, and the
//! tuning constants of the built-in strategies.

use serde::{Deserialize, Serialize};

use super::error::{ExpeditionError, Result};
use super::player::MAX_PLAYERS;
use crate::strategy::StrategyKind;

/// Rounds in a full game. Each round unlocks one more special treasure.
pub const ROUNDS: u8 = 5;

/// Expedition configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpeditionConfig {
    /// Master seed. The deck and each seat's strategy use derived streams.
    pub seed: u64,

    /// Number of seats (1-8).
    pub player_count: usize,

    /// Strategy per seat, cycled when shorter than `player_count`.
    pub strategies: Vec<StrategyKind>,

    /// Probability that a fixed-odds player keeps exploring.
    pub explore_odds: f64,

    /// Multiplier applied to the risk-adjusted retreat probability.
    pub risk_factor: f64,

    /// Divisor applied to the expected treasure per draw, standing in for
    /// the split among co-explorers.
    pub treasure_discount: f64,
}

impl Default for ExpeditionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            player_count: 3,
            strategies: vec![
                StrategyKind::FixedOdds,
                StrategyKind::RiskAdjusted,
                StrategyKind::Interactive,
            ],
            explore_odds: 0.8,
            risk_factor: 1.65,
            treasure_discount: 4.0,
        }
    }
}

impl ExpeditionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn with_strategies(mut self, strategies: impl Into<Vec<StrategyKind>>) -> Self {
        self.strategies = strategies.into();
        self
    }

    pub fn with_explore_odds(mut self, odds: f64) -> Self {
        self.explore_odds = odds;
        self
    }

    pub fn with_risk_factor(mut self, factor: f64) -> Self {
        self.risk_factor = factor;
        self
    }

    pub fn with_treasure_discount(mut self, discount: f64) -> Self {
        self.treasure_discount = discount;
        self
    }

    /// Strategy assigned to seat `index`, cycling the configured list.
    #[must_use]
    pub fn strategy_for(&self, index: usize) -> Option<StrategyKind> {
        if self.strategies.is_empty() {
            return None;
        }
        Some(self.strategies[index % self.strategies.len()])
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ExpeditionError::InvalidConfig(format!(
                "player_count must be 1-{MAX_PLAYERS}, got {}",
                self.player_count
            )));
        }
        if self.strategies.is_empty() {
            return Err(ExpeditionError::InvalidConfig(
                "at least one strategy is required".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.explore_odds) {
            return Err(ExpeditionError::InvalidConfig(format!(
                "explore_odds must be within [0, 1], got {}",
                self.explore_odds
            )));
        }
        if !self.risk_factor.is_finite() || self.risk_factor < 0.0 {
            return Err(ExpeditionError::InvalidConfig(format!(
                "risk_factor must be a non-negative number, got {}",
                self.risk_factor
            )));
        }
        if !self.treasure_discount.is_finite() || self.treasure_discount <= 0.0 {
            return Err(ExpeditionError::InvalidConfig(format!(
                "treasure_discount must be positive, got {}",
                self.treasure_discount
            )));
        }
        Ok(())
    }
}
