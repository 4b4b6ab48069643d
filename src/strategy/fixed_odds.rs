//! Fixed-odds strategy: explore with a constant probability.

use crate::core::{Decision, GameRng, RandomSource, Result};

use super::{DecisionContext, Strategy};

/// Explores with probability `explore_odds` regardless of the table.
#[derive(Clone, Debug)]
pub struct FixedOdds<R = GameRng> {
    explore_odds: f64,
    rng: R,
}

impl<R: RandomSource> FixedOdds<R> {
    pub const NAME: &'static str = "fixed-odds";

    /// Default explore probability.
    pub const DEFAULT_ODDS: f64 = 0.8;

    pub fn new(explore_odds: f64, rng: R) -> Self {
        Self {
            explore_odds: explore_odds.clamp(0.0, 1.0),
            rng,
        }
    }

    #[must_use]
    pub fn explore_odds(&self) -> f64 {
        self.explore_odds
    }
}

impl<R: RandomSource + Send> Strategy for FixedOdds<R> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn decide(&mut self, ctx: &DecisionContext<'_>) -> Result<Decision> {
        let explore = self
            .rng
            .weighted_choice(self.explore_odds, 1.0 - self.explore_odds);
        let decision = Decision::from_explore(explore);
        tracing::debug!(player = %ctx.player, %decision, "fixed-odds decision");
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardPool, Temple};
    use crate::core::{PlayerId, SequenceRng};

    fn decide_n<R: RandomSource + Send>(strategy: &mut FixedOdds<R>, n: usize) -> Vec<Decision> {
        let pool = CardPool::standard();
        let temple = Temple::new();
        let ctx = DecisionContext {
            round: 1,
            step: 0,
            player: PlayerId::new(0),
            name: "Player 1",
            round_treasure: 0,
            total_treasure: 0,
            exploring: 1,
            temple: &temple,
            pool: &pool,
            pool_size: 31,
        };
        (0..n).map(|_| strategy.decide(&ctx).unwrap()).collect()
    }

    #[test]
    fn test_follows_injected_source() {
        let rng = SequenceRng::new().with_choices([true, false, true]);
        let mut strategy = FixedOdds::new(0.8, rng);

        assert_eq!(
            decide_n(&mut strategy, 3),
            vec![Decision::Explore, Decision::Retreat, Decision::Explore]
        );
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = FixedOdds::new(0.8, GameRng::new(9));
        let mut b = FixedOdds::new(0.8, GameRng::new(9));
        assert_eq!(decide_n(&mut a, 50), decide_n(&mut b, 50));
    }

    #[test]
    fn test_odds_extremes() {
        let mut always = FixedOdds::new(1.0, GameRng::new(1));
        assert!(decide_n(&mut always, 100).iter().all(|d| d.is_explore()));

        let mut never = FixedOdds::new(0.0, GameRng::new(1));
        assert!(decide_n(&mut never, 100).iter().all(|d| !d.is_explore()));
    }

    #[test]
    fn test_explores_about_eighty_percent() {
        let mut strategy = FixedOdds::new(FixedOdds::<GameRng>::DEFAULT_ODDS, GameRng::new(5));
        let explored = decide_n(&mut strategy, 5_000)
            .into_iter()
            .filter(|d| d.is_explore())
            .count();
        assert!((3_800..4_200).contains(&explored), "got {explored}");
    }
}
