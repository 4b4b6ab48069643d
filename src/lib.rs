//! # temple-expedition
//!
//! Simulation engine for a push-your-luck temple expedition card game.
//!
//! Several players walk into a temple together. Each step every player
//! still inside decides, at the same time as the others, whether to push on
//! or retreat with what they carry. Then one card is turned over. Treasure
//! is split evenly among the players still inside and the remainder is
//! left on the path. A second hazard of an already-seen kind sends
//! everyone still inside running with nothing.
//!
//! ## Design Principles
//!
//! 1. **Single writer**: `RoundEngine` is the only code that mutates
//!    players, deck, temple, and pools. Strategies read a snapshot.
//!
//! 2. **Injected collaborators**: randomness (`RandomSource`), human input
//!    (`InputSource`), and the step log (`EventSink`) are all passed in, so
//!    every run can be replayed from a seed or a script.
//!
//! 3. **Exact arithmetic**: treasure is integral and every split keeps its
//!    remainder.
//!
//! ## Modules
//!
//! - `core`: seats, randomness, configuration, decisions, errors
//! - `cards`: cards, the card pool, the per-round deck, the temple
//! - `probability`: hazard-risk and expected-treasure heuristics
//! - `strategy`: fixed-odds, risk-adjusted, and interactive players
//! - `rules`: the round engine and settlement
//! - `game`: the five-round game controller
//! - `events`: step records and the append-only log

pub mod cards;
pub mod core;
pub mod events;
pub mod game;
pub mod probability;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    Decision, ExpeditionConfig, ExpeditionError, GameRng, GameRngState, PlayerId, PlayerMap,
    RandomSource, Result, SequenceRng, ROUNDS,
};

pub use crate::cards::{Card, CardKind, CardPool, Deck, DeckComposition, HazardLevel, Reveal, Temple};

pub use crate::probability::{expected_treasure_value, hazard_risk_estimate};

pub use crate::strategy::{
    DecisionContext, FixedOdds, InputSource, Interactive, ReaderInput, RiskAdjusted,
    ScriptedInput, Strategy, StrategyKind,
};

pub use crate::rules::{RoundEngine, RoundPhase, RoundPools, RoundSummary, StepReport};

pub use crate::game::{Expedition, GameOutcome, Player};

pub use crate::events::{EventLog, EventSink, StepRecord};
