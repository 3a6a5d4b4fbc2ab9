//! Session tests.
//!
//! Drive `DiceGame` the way a UI would: click to roll, wait for the dice,
//! complete the roll, and watch the notifications.

use dice_race::core::{DiceConfig, GameConfig, GameRng, PlayerId};
use dice_race::dice::{DiceRoll, FixedRolls};
use dice_race::rules::{RejectReason, TurnOutcome};
use dice_race::session::{DiceGame, EventLog, GameEvent, GameObserver};

/// Notifications arrive in order: roll started, roll resolved, then turn or game over.
#[test]
fn test_notification_order_through_game_over() {
    let config = GameConfig::new().with_target_score(20);
    let mut game = DiceGame::new(config, FixedRolls::new([6, 6]), EventLog::new()).unwrap();
    game.start_game(2).unwrap();

    // 12 each, then player 1 reaches 24
    assert!(matches!(game.roll(), TurnOutcome::NextTurn { .. }));
    assert!(matches!(game.roll(), TurnOutcome::NextTurn { .. }));
    let outcome = game.roll();
    assert!(outcome.is_winner(PlayerId::new(1)));

    let events = game.observer_mut().drain();
    let kinds: Vec<&str> = events
        .iter()
        .map(|e| match e {
            GameEvent::StateInitialized(_) => "init",
            GameEvent::RollStarted { .. } => "started",
            GameEvent::RollResolved { .. } => "resolved",
            GameEvent::TurnAdvanced(_) => "turn",
            GameEvent::GameOver(_) => "over",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["init", "started", "resolved", "turn", "started", "resolved", "turn", "started", "resolved", "over"]
    );

    match events.last() {
        Some(GameEvent::GameOver(winner)) => assert_eq!(winner.score, 24),
        other => panic!("expected game over, got {:?}", other),
    }
    match &events[2] {
        GameEvent::RollResolved { total, state } => {
            assert_eq!(*total, 12);
            assert_eq!(state.scores(), vec![12, 0]);
            assert_eq!(state.last_total(), Some(12));
        }
        other => panic!("expected roll resolved, got {:?}", other),
    }

    // Finished game refuses further rolls without notifying anyone
    assert_eq!(game.roll(), TurnOutcome::Rejected(RejectReason::Inactive));
    assert!(game.observer().events().is_empty());
}

/// Only one roll is in flight per turn, however many times the button is pressed.
#[test]
fn test_repeated_requests_apply_once() {
    let mut game = DiceGame::new(GameConfig::default(), FixedRolls::new([2, 3]), EventLog::new()).unwrap();
    game.start_game(3).unwrap();

    assert!(matches!(game.request_roll(), TurnOutcome::Rolling { .. }));
    for _ in 0..5 {
        assert_eq!(game.request_roll(), TurnOutcome::Rejected(RejectReason::RollPending));
    }
    assert_eq!(game.pending_roll(), Some(&DiceRoll::from_faces(&[2, 3])));

    assert!(matches!(game.complete_roll(), TurnOutcome::NextTurn { .. }));
    assert_eq!(game.complete_roll(), TurnOutcome::Rejected(RejectReason::NoRollPending));

    let state = game.state().unwrap();
    assert_eq!(state.scores(), vec![5, 0, 0]);
    assert_eq!(state.rolls_applied(), 1);

    let started = game
        .observer()
        .events()
        .iter()
        .filter(|e| matches!(e, GameEvent::RollStarted { .. }))
        .count();
    assert_eq!(started, 1);
}

/// Starting a new game mid-roll drops the pending roll.
#[test]
fn test_restart_discards_pending_roll() {
    let mut game = DiceGame::new(GameConfig::default(), FixedRolls::new([4]), ()).unwrap();
    game.start_game(2).unwrap();
    game.request_roll();

    game.start_game(4).unwrap();

    assert!(game.pending_roll().is_none());
    assert_eq!(game.complete_roll(), TurnOutcome::Rejected(RejectReason::NoRollPending));
    assert_eq!(game.state().unwrap().scores(), vec![0, 0, 0, 0]);
}

/// Custom dice flow through to the roll total.
#[test]
fn test_custom_dice() {
    let config = GameConfig::new().with_dice(DiceConfig::new(20, 3));
    let mut game = DiceGame::new(config, FixedRolls::new([20, 1, 7]), ()).unwrap();
    game.start_game(2).unwrap();

    game.roll();
    assert_eq!(game.state().unwrap().scores(), vec![28, 0]);
}

/// Two sessions seeded alike play identical games.
#[test]
fn test_seeded_sessions_replay() {
    let play = |seed: u64| {
        let mut game = DiceGame::new(GameConfig::default(), GameRng::new(seed), EventLog::new()).unwrap();
        game.start_game(4).unwrap();
        while !game.roll().is_rejected() {}
        let (_, log, state) = game.into_parts();
        (log.events().to_vec(), state)
    };

    let (events_a, state_a) = play(2024);
    let (events_b, state_b) = play(2024);

    assert_eq!(events_a, events_b);
    assert_eq!(state_a, state_b);

    let state = state_a.unwrap();
    assert!(!state.is_active());
    assert!(state.winner().is_some());
}

/// A borrowed observer sees everything too.
#[test]
fn test_borrowed_observer() {
    struct Counter {
        turns: usize,
        winners: Vec<PlayerId>,
    }

    impl GameObserver for Counter {
        fn on_turn_advanced(&mut self, _player: &dice_race::core::Player) {
            self.turns += 1;
        }

        fn on_game_over(&mut self, winner: &dice_race::core::Player) {
            self.winners.push(winner.id);
        }
    }

    let mut counter = Counter { turns: 0, winners: Vec::new() };
    {
        let config = GameConfig::new().with_target_score(10);
        let mut game = DiceGame::new(config, FixedRolls::new([1, 1, 5, 5]), &mut counter).unwrap();
        game.start_game(2).unwrap();
        game.roll(); // 2
        game.roll(); // 10, wins
    }

    assert_eq!(counter.turns, 1);
    assert_eq!(counter.winners, vec![PlayerId::new(2)]);
}

/// Reset keeps the final scores readable but stops play.
#[test]
fn test_reset_to_setup() {
    let mut game = DiceGame::new(GameConfig::default(), FixedRolls::new([3, 4]), ()).unwrap();
    game.start_game(2).unwrap();
    game.roll();

    game.reset();

    let state = game.state().unwrap();
    assert!(!state.is_active());
    assert_eq!(state.scores(), vec![7, 0]);
    assert_eq!(game.roll(), TurnOutcome::Rejected(RejectReason::Inactive));
}
