//! Five-round game controller tests.

use temple_expedition::cards::SPECIAL_VALUES;
use temple_expedition::{
    Card, EventLog, Expedition, ExpeditionConfig, ExpeditionError, GameRng, HazardLevel,
    InputSource, Interactive, Player, PlayerId, ScriptedInput, SequenceRng, StrategyKind, ROUNDS,
};

fn automatic(seed: u64, players: usize) -> ExpeditionConfig {
    ExpeditionConfig::new()
        .with_seed(seed)
        .with_player_count(players)
        .with_strategies([StrategyKind::FixedOdds, StrategyKind::RiskAdjusted])
}

fn no_input(_: PlayerId) -> Option<Box<dyn InputSource>> {
    None
}

#[test]
fn test_seeded_games_are_reproducible() {
    for seed in [1, 42, 9001] {
        let mut first = Expedition::from_config(automatic(seed, 4), EventLog::new(), no_input).unwrap();
        let mut second =
            Expedition::from_config(automatic(seed, 4), EventLog::new(), no_input).unwrap();

        let a = first.play_game().unwrap();
        let b = second.play_game().unwrap();

        assert_eq!(a, b);
        assert_eq!(first.log(), second.log());
    }
}

fn hazard(level: u8) -> Card {
    Card::Hazard(HazardLevel::new(level).unwrap())
}

/// Seed 42, fixed-odds / risk-adjusted / fixed-odds. Pins the deck stream,
/// each seat's strategy stream, and the draws every strategy consumes.
#[test]
fn test_seed_42_trace() {
    let mut game = Expedition::from_config(automatic(42, 3), EventLog::new(), no_input).unwrap();
    let summary = game.play_round().unwrap().clone();

    assert_eq!(
        summary.revealed,
        vec![hazard(2), hazard(3), Card::Treasure(2), Card::Treasure(1), hazard(4)]
    );
    assert_eq!(summary.steps, 5);
    assert_eq!(summary.bust, None);
    assert_eq!(summary.banked.values().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(summary.lost_to_bust, 0);
    assert_eq!(summary.forfeited, 0);

    // One retreat per step from the third step on, in seat order.
    let claims: Vec<Vec<(PlayerId, u32)>> = game
        .log()
        .records()
        .iter()
        .map(|record| record.retreated.to_vec())
        .collect();
    assert_eq!(
        claims,
        vec![
            vec![],
            vec![],
            vec![(PlayerId::new(0), 0)],
            vec![(PlayerId::new(1), 1)],
            vec![(PlayerId::new(2), 2)],
        ]
    );
    let totals: Vec<u32> = game.players().values().map(Player::total_treasure).collect();
    assert_eq!(totals, vec![0, 1, 2]);

    let outcome = game.play_game().unwrap();
    let per_round: Vec<_> = outcome
        .rounds
        .iter()
        .map(|r| (r.steps, r.bust.map(HazardLevel::level)))
        .collect();
    assert_eq!(
        per_round,
        vec![(5, None), (4, None), (9, Some(2)), (2, Some(1)), (3, Some(3))]
    );
    assert_eq!(outcome.rounds[1].forfeited, 13);
    assert_eq!(outcome.rounds[4].lost_to_bust, 3);
    assert_eq!(outcome.totals.values().copied().collect::<Vec<_>>(), vec![4, 13, 49]);
    assert_eq!(outcome.leaders, vec![PlayerId::new(2)]);
}

#[test]
fn test_game_plays_five_rounds() {
    let mut game = Expedition::from_config(automatic(7, 3), EventLog::new(), no_input).unwrap();
    assert_eq!(game.next_round(), Some(1));
    assert!(game.outcome().is_none());

    for expected in 1..=ROUNDS {
        assert_eq!(game.next_round(), Some(expected));
        let summary = game.play_round().unwrap();
        assert_eq!(summary.round, expected);
        if expected < ROUNDS {
            assert!(game.outcome().is_none());
        }
    }

    assert!(game.is_finished());
    assert_eq!(game.next_round(), None);
    assert_eq!(game.rounds().len(), ROUNDS as usize);
    assert!(matches!(
        game.play_round(),
        Err(ExpeditionError::InvalidRound(6))
    ));

    let outcome = game.outcome().unwrap();
    assert_eq!(outcome.rounds.len(), ROUNDS as usize);
    for (id, player) in game.players().iter() {
        assert_eq!(outcome.total(id), player.total_treasure());
        assert_eq!(outcome.names[id], player.name());
    }
}

#[test]
fn test_specials_unlock_one_per_round() {
    for seed in 0..10 {
        let mut game = Expedition::from_config(automatic(seed, 2), EventLog::new(), no_input).unwrap();
        let outcome = game.play_game().unwrap();

        for summary in &outcome.rounds {
            let unlocked = &SPECIAL_VALUES[..summary.round as usize];
            for card in &summary.revealed {
                if let Card::SpecialTreasure(value) = card {
                    assert!(unlocked.contains(value), "round {} drew special {value}", summary.round);
                }
            }
        }
    }
}

#[test]
fn test_totals_never_decrease() {
    let mut game = Expedition::from_config(automatic(3, 5), EventLog::new(), no_input).unwrap();
    let outcome = game.play_game().unwrap();

    let log = game.log();
    assert!(!log.is_empty());
    let mut previous = vec![0u32; 5];
    for record in log.records() {
        let current: Vec<u32> = record.totals.values().copied().collect();
        for (before, after) in previous.iter().zip(&current) {
            assert!(after >= before);
        }
        previous = current;
    }
    assert_eq!(previous, outcome.totals.values().copied().collect::<Vec<_>>());
}

#[test]
fn test_leaders_share_the_highest_total() {
    let mut game = Expedition::from_config(automatic(11, 4), EventLog::new(), no_input).unwrap();
    let outcome = game.play_game().unwrap();

    let best = outcome.totals.values().copied().max().unwrap();
    assert!(!outcome.leaders.is_empty());
    for (id, &total) in outcome.totals.iter() {
        assert_eq!(outcome.leaders.contains(&id), total == best);
    }
}

#[test]
fn test_interactive_seat_requires_input() {
    let config = automatic(1, 2).with_strategies([StrategyKind::Interactive]);
    let result = Expedition::from_config(config, EventLog::new(), no_input);

    assert!(matches!(
        result,
        Err(ExpeditionError::MissingInput { player }) if player == PlayerId::new(0)
    ));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = automatic(1, 0);
    assert!(matches!(
        Expedition::from_config(config, EventLog::new(), no_input),
        Err(ExpeditionError::InvalidConfig(_))
    ));

    let config = automatic(1, 2).with_explore_odds(1.5);
    assert!(matches!(
        Expedition::from_config(config, EventLog::new(), no_input),
        Err(ExpeditionError::InvalidConfig(_))
    ));
}

#[test]
fn test_silent_players_retreat_at_once() {
    // An input source that never answers means retreat every time.
    let config = automatic(5, 3).with_strategies([StrategyKind::Interactive]);
    let mut game = Expedition::from_config(config, EventLog::new(), |_| {
        Some(Box::new(ScriptedInput::default()) as Box<dyn InputSource>)
    })
    .unwrap();

    let outcome = game.play_game().unwrap();
    assert!(outcome.totals.values().all(|&total| total == 0));
    assert_eq!(outcome.leaders.len(), 3);

    // One step per round: everyone leaves, one card turns over unclaimed.
    assert_eq!(game.log().len(), ROUNDS as usize);
    for summary in &outcome.rounds {
        assert_eq!(summary.steps, 1);
        let points = summary.revealed.iter().map(Card::points).sum::<u32>();
        assert_eq!(summary.forfeited, points);
    }
}

#[test]
fn test_explicit_roster_with_scripted_draws() {
    // Always the front card: round k draws the first treasures in pool order.
    let players = vec![
        Player::new(
            "Ada",
            Box::new(Interactive::new(Box::new(ScriptedInput::new(["E", "R"].repeat(ROUNDS as usize))))),
        ),
        Player::new(
            "Brook",
            Box::new(Interactive::new(Box::new(ScriptedInput::new(["E", "R"].repeat(ROUNDS as usize))))),
        ),
    ];
    let mut game = Expedition::new(ExpeditionConfig::new(), players, SequenceRng::new(), EventLog::new()).unwrap();
    let outcome = game.play_game().unwrap();

    // Each round: treasure 1 split two ways (1 on the path), both leave
    // together with nothing added, then treasure 2 goes unclaimed.
    assert_eq!(outcome.totals.values().copied().collect::<Vec<_>>(), vec![0, 0]);
    for summary in &outcome.rounds {
        assert_eq!(summary.revealed, vec![Card::Treasure(1), Card::Treasure(2)]);
        assert_eq!(summary.forfeited, 1 + 2);
    }
    assert_eq!(outcome.names[PlayerId::new(0)], "Ada");
}

#[test]
fn test_empty_roster_is_rejected() {
    let result = Expedition::new(ExpeditionConfig::new(), Vec::new(), GameRng::new(1), EventLog::new());
    assert!(matches!(result, Err(ExpeditionError::InvalidConfig(_))));
}

#[test]
fn test_logs_from_separate_runs_append() {
    let mut stored = EventLog::new();
    let mut expected = 0;

    for seed in [2, 3] {
        let mut game = Expedition::from_config(automatic(seed, 2), EventLog::new(), no_input).unwrap();
        game.play_game().unwrap();
        let log = game.into_log();
        expected += log.len();

        let restored = EventLog::from_json(&stored.to_json().unwrap()).unwrap();
        assert_eq!(restored, stored);
        stored.extend(log);
    }

    assert_eq!(stored.len(), expected);
    let decoded = EventLog::decode(&stored.encode().unwrap()).unwrap();
    assert_eq!(decoded, stored);
    assert_eq!(decoded.round(1).next().map(|r| r.step), Some(0));
}
