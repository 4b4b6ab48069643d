//! Risk-adjusted strategy.
//!
//! Retreat probability grows with the estimated bust chance and with the
//! treasure the player stands to lose, and shrinks with the treasure still
//! to be found:
//!
//! ```text
//! risk = clamp(risk_factor × hazard_risk × round_treasure / expected_value, 0, 1)
//! ```
//!
//! With nothing revealed yet the player always explores. A zero expected
//! value saturates the risk to 1: nothing left is worth the gamble.

use crate::core::{Decision, GameRng, RandomSource, Result};
use crate::probability::{expected_treasure_value_discounted, hazard_risk_estimate, TREASURE_DISCOUNT};

use super::{DecisionContext, Strategy};

#[derive(Clone, Debug)]
pub struct RiskAdjusted<R = GameRng> {
    risk_factor: f64,
    treasure_discount: f64,
    rng: R,
}

impl<R: RandomSource> RiskAdjusted<R> {
    pub const NAME: &'static str = "risk-adjusted";

    pub const DEFAULT_RISK_FACTOR: f64 = 1.65;

    pub fn new(rng: R) -> Self {
        Self {
            risk_factor: Self::DEFAULT_RISK_FACTOR,
            treasure_discount: TREASURE_DISCOUNT,
            rng,
        }
    }

    #[must_use]
    pub fn with_risk_factor(mut self, factor: f64) -> Self {
        self.risk_factor = factor;
        self
    }

    #[must_use]
    pub fn with_treasure_discount(mut self, discount: f64) -> Self {
        self.treasure_discount = discount;
        self
    }

    /// Probability of retreating given the context, in `[0, 1]`.
    pub fn retreat_risk(&self, ctx: &DecisionContext<'_>) -> Result<f64> {
        if ctx.temple.is_empty() {
            return Ok(0.0);
        }

        let hazard = hazard_risk_estimate(ctx.temple, ctx.pool_size)?;
        let expected = expected_treasure_value_discounted(
            ctx.temple,
            ctx.pool.treasure_cards(),
            ctx.pool_size,
            self.treasure_discount,
        )?;
        tracing::trace!(player = %ctx.player, hazard, expected, "risk inputs");

        if expected <= 0.0 {
            return Ok(1.0);
        }

        let risk = self.risk_factor * hazard * f64::from(ctx.round_treasure) / expected;
        Ok(risk.clamp(0.0, 1.0))
    }
}

impl<R: RandomSource + Send> Strategy for RiskAdjusted<R> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn decide(&mut self, ctx: &DecisionContext<'_>) -> Result<Decision> {
        if ctx.temple.is_empty() {
            return Ok(Decision::Explore);
        }

        let risk = self.retreat_risk(ctx)?;
        let decision = Decision::from_explore(self.rng.weighted_choice(1.0 - risk, risk));
        tracing::debug!(player = %ctx.player, risk, %decision, "risk-adjusted decision");
        Ok(decision)
    }
}
