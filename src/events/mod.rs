//! Step-by-step event log.
//!
//! After every step the round engine hands an immutable [`StepRecord`] to
//! the [`EventSink`] it was constructed with. [`EventLog`] is the in-memory
//! append-only sink; framing it for storage (JSON or bincode) is up to the
//! caller. `()` discards records.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, DeckComposition, Temple};
use crate::core::{PlayerId, PlayerMap, Result};

/// Snapshot of the table after one step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub round: u8,
    pub step: u32,
    /// Seat names, so a stored log reads without the roster.
    pub names: PlayerMap<String>,
    /// Banked treasure per player.
    pub totals: PlayerMap<u32>,
    /// What is still face-down.
    pub deck: DeckComposition,
    /// Which players are still inside after the step resolved.
    pub exploring: PlayerMap<bool>,
    /// Players who retreated this step, with their total after claiming.
    pub retreated: SmallVec<[(PlayerId, u32); 4]>,
    pub card: Card,
    /// Every card revealed this round up to and including `card`.
    pub temple: Temple,
    pub bust: bool,
}

/// Append-only consumer of step records.
pub trait EventSink {
    fn record(&mut self, record: StepRecord);
}

impl EventSink for () {
    fn record(&mut self, _record: StepRecord) {}
}

impl EventSink for Vec<StepRecord> {
    fn record(&mut self, record: StepRecord) {
        self.push(record);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn record(&mut self, record: StepRecord) {
        (**self).record(record);
    }
}

/// In-memory event log.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog {
    records: Vec<StepRecord>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records belonging to one round.
    pub fn round(&self, round: u8) -> impl Iterator<Item = &StepRecord> {
        self.records.iter().filter(move |r| r.round == round)
    }

    /// Append every record of `other` after the existing ones.
    pub fn extend(&mut self, other: EventLog) {
        self.records.extend(other.records);
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compact binary framing.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl EventSink for EventLog {
    fn record(&mut self, record: StepRecord) {
        self.records.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn record(round: u8, step: u32) -> StepRecord {
        StepRecord {
            round,
            step,
            names: PlayerMap::new(2, |p| p.default_name()),
            totals: PlayerMap::new(2, |p| p.index() as u32 * 3),
            deck: DeckComposition::default(),
            exploring: PlayerMap::with_value(2, true),
            retreated: smallvec![(PlayerId::new(1), 3)],
            card: Card::Treasure(5),
            temple: Temple::from(vec![Card::Treasure(5)]),
            bust: false,
        }
    }

    #[test]
    fn test_append_and_filter_by_round() {
        let mut log = EventLog::new();
        log.record(record(1, 0));
        log.record(record(1, 1));
        log.record(record(2, 0));

        assert_eq!(log.len(), 3);
        assert_eq!(log.round(1).count(), 2);
        assert_eq!(log.round(3).count(), 0);
    }

    #[test]
    fn test_json_framing_is_a_list() {
        let mut log = EventLog::new();
        log.record(record(1, 0));

        let json = log.to_json().unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains(r#"["Player 1","Player 2"]"#));
        assert!(json.contains(r#""temple":[{"treasure":5}]"#));
        assert_eq!(EventLog::from_json(&json).unwrap(), log);
    }

    #[test]
    fn test_bincode_framing() {
        let mut log = EventLog::new();
        log.record(record(4, 2));

        let bytes = log.encode().unwrap();
        assert_eq!(EventLog::decode(&bytes).unwrap(), log);
        assert!(EventLog::decode(&bytes[..3]).is_err());
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut stored = EventLog::new();
        stored.record(record(1, 0));
        let mut fresh = EventLog::new();
        fresh.record(record(2, 0));

        stored.extend(fresh);
        let rounds: Vec<_> = stored.records().iter().map(|r| r.round).collect();
        assert_eq!(rounds, vec![1, 2]);
    }

    #[test]
    fn test_unit_sink_discards() {
        ().record(record(1, 0));
    }
}
