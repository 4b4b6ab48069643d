//! Risk heuristics conditioned on the cards already revealed.
//!
//! Both estimates are deliberately coarse:
//!
//! - every revealed hazard level is assumed to have exactly
//!   [`DANGER_COPIES_PER_LEVEL`] matching cards still face-down;
//! - the average remaining treasure per draw is divided by
//!   [`TREASURE_DISCOUNT`] to stand in for the split among co-explorers.
//!
//! The functions are pure. They require at least one undrawn card and
//! report [`ExpeditionError::ExhaustedPool`] otherwise.

use rustc_hash::FxHashMap;

use crate::cards::{Card, Temple};
use crate::core::{ExpeditionError, Result};

/// Face-down cards assumed to match each revealed hazard level.
pub const DANGER_COPIES_PER_LEVEL: f64 = 2.0;

/// Default divisor for the expected treasure per draw.
pub const TREASURE_DISCOUNT: f64 = 4.0;

/// Cards not yet revealed this round.
pub fn undrawn_cards(temple: &Temple, pool_size: usize) -> Result<usize> {
    match pool_size.checked_sub(temple.len()) {
        Some(remaining) if remaining > 0 => Ok(remaining),
        _ => Err(ExpeditionError::ExhaustedPool {
            pool_size,
            revealed: temple.len(),
        }),
    }
}

/// Chance that the next draw busts the round, in `[0, 1]`.
///
/// `2 × distinct revealed hazard levels / undrawn cards`, capped at 1.
pub fn hazard_risk_estimate(temple: &Temple, pool_size: usize) -> Result<f64> {
    let remaining = undrawn_cards(temple, pool_size)?;
    let danger = DANGER_COPIES_PER_LEVEL * temple.distinct_hazard_levels() as f64;
    Ok((danger / remaining as f64).min(1.0))
}

/// Discounted average value per draw of the treasure cards still face-down.
///
/// `(sum of undrawn treasure values / undrawn cards) / TREASURE_DISCOUNT`.
/// Specials are not counted.
pub fn expected_treasure_value(
    temple: &Temple,
    treasure_cards: &[Card],
    pool_size: usize,
) -> Result<f64> {
    expected_treasure_value_discounted(temple, treasure_cards, pool_size, TREASURE_DISCOUNT)
}

/// [`expected_treasure_value`] with an explicit discount divisor.
pub fn expected_treasure_value_discounted(
    temple: &Temple,
    treasure_cards: &[Card],
    pool_size: usize,
    discount: f64,
) -> Result<f64> {
    let remaining = undrawn_cards(temple, pool_size)?;
    let undrawn_value = undrawn_treasure_value(temple, treasure_cards);
    Ok(undrawn_value as f64 / remaining as f64 / discount)
}

/// Sum of treasure values not yet revealed.
///
/// Revealed cards are removed from `treasure_cards` one copy at a time, so
/// duplicates (two 5s, two 7s, two 11s) are handled as a multiset.
pub fn undrawn_treasure_value(temple: &Temple, treasure_cards: &[Card]) -> u32 {
    let mut revealed: FxHashMap<u32, usize> = FxHashMap::default();
    for value in temple.treasure_values() {
        *revealed.entry(value).or_default() += 1;
    }

    treasure_cards
        .iter()
        .filter_map(|card| match *card {
            Card::Treasure(v) => Some(v),
            _ => None,
        })
        .filter(|v| match revealed.get_mut(v) {
            Some(count) if *count > 0 => {
                *count -= 1;
                false
            }
            _ => true,
        })
        .sum()
}
