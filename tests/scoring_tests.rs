//! Scoring integration tests.
//!
//! These tests drive whole legs through the scoring engine and check the
//! derived turn history and statistics against hand-computed values.

use rust_darts::core::{BustRule, GameConfig, Multiplier, Player, PlayerId, ResetPolicy, Segment};
use rust_darts::scoring::{BustReason, ScoringEngine, StatsCalculator, TurnHistory};

fn num(n: u8) -> Segment {
    Segment::number(n).unwrap()
}

fn t20() -> (Segment, Multiplier) {
    (num(20), Multiplier::Triple)
}

fn throw_all(engine: &ScoringEngine, player: &mut Player, darts: &[(Segment, Multiplier)]) {
    for &(segment, multiplier) in darts {
        engine
            .apply_throw(player, segment, multiplier)
            .expect("throw should not bust");
    }
}

// =============================================================================
// Whole legs
// =============================================================================

/// Nine-dart 501: T20 x6, T20 T19 D12.
#[test]
fn test_nine_dart_leg() {
    let engine = ScoringEngine::default();
    let mut player = Player::new(PlayerId::new(1), 501);

    throw_all(&engine, &mut player, &[t20(); 6]);
    assert_eq!(player.score(), 141);

    throw_all(
        &engine,
        &mut player,
        &[
            t20(),
            (num(19), Multiplier::Triple),
            (num(12), Multiplier::Double),
        ],
    );

    assert!(player.has_finished());
    assert_eq!(player.total_darts_thrown(), 9);
    assert_eq!(player.total_score_accumulated(), 501);

    let history = TurnHistory::for_player(&player);
    let totals: Vec<_> = history.iter().map(|t| t.total).collect();
    assert_eq!(totals, [180, 180, 141]);

    let avg = StatsCalculator::three_dart_average(&player).unwrap();
    assert_eq!(avg.to_string(), "167.00");
}

/// A bust mid-turn does not consume a dart slot.
#[test]
fn test_bust_does_not_advance_turn() {
    let engine = ScoringEngine::default();
    let mut player = Player::new(PlayerId::new(1), 32);

    engine
        .apply_throw(&mut player, num(16), Multiplier::Single)
        .unwrap();
    assert_eq!(player.darts_left_in_turn(), 2);

    let bust = engine
        .apply_throw(&mut player, num(20), Multiplier::Single)
        .unwrap_err();
    assert_eq!(bust.reason, BustReason::BelowZero);
    assert_eq!(bust.score, 16);
    assert_eq!(player.darts_left_in_turn(), 2);
    assert_eq!(player.throws().len(), 1);
}

/// Misses count as darts thrown and drag the average down.
#[test]
fn test_misses_count_toward_average() {
    let engine = ScoringEngine::default();
    let mut player = Player::new(PlayerId::new(1), 501);

    throw_all(
        &engine,
        &mut player,
        &[t20(), (Segment::Miss, Multiplier::Single), (Segment::Miss, Multiplier::Triple)],
    );

    let history = TurnHistory::for_player(&player);
    assert_eq!(history.turns()[0].to_string(), "Turn 1: T20 Miss Miss = 60");
    assert_eq!(StatsCalculator::three_dart_average(&player).unwrap().value(), 60.0);
}

// =============================================================================
// Undo
// =============================================================================

/// Undo across a turn boundary restores the previous turn's partial state.
#[test]
fn test_undo_across_turn_boundary() {
    let engine = ScoringEngine::default();
    let mut player = Player::new(PlayerId::new(1), 501);
    throw_all(&engine, &mut player, &[t20(); 4]);
    assert_eq!(TurnHistory::for_player(&player).len(), 2);

    engine.undo_last_throw(&mut player).unwrap();
    assert_eq!(TurnHistory::for_player(&player).len(), 1);
    assert_eq!(player.darts_left_in_turn(), 3);

    engine.undo_last_throw(&mut player).unwrap();
    assert_eq!(player.darts_left_in_turn(), 1);
    assert_eq!(player.score(), 381);
}

/// Undoing everything returns to a pristine record.
#[test]
fn test_undo_all() {
    let engine = ScoringEngine::default();
    let mut player = Player::new(PlayerId::new(1), 501);
    let fresh = player.clone();
    throw_all(&engine, &mut player, &[t20(); 5]);

    while engine.undo_last_throw(&mut player).is_some() {}

    assert_eq!(player, fresh);
    assert!(StatsCalculator::three_dart_average(&player).is_none());
}

// =============================================================================
// Reset policies
// =============================================================================

/// The two reset policies are distinguishable through the average.
#[test]
fn test_reset_policies_are_distinguishable() {
    let keep = ScoringEngine::new(&GameConfig::new().with_reset_policy(ResetPolicy::KeepStats));
    let clear = ScoringEngine::new(&GameConfig::new().with_reset_policy(ResetPolicy::ClearStats));

    let mut a = Player::new(PlayerId::new(1), 501);
    let mut b = Player::new(PlayerId::new(2), 501);
    throw_all(&keep, &mut a, &[t20(); 3]);
    throw_all(&clear, &mut b, &[t20(); 3]);

    keep.reset_player(&mut a);
    clear.reset_player(&mut b);

    assert_eq!(a.score(), 501);
    assert_eq!(b.score(), 501);
    assert!(a.throws().is_empty());
    assert!(b.throws().is_empty());

    // Lifetime average survives under KeepStats.
    assert_eq!(StatsCalculator::three_dart_average(&a).unwrap().to_string(), "180.00");
    assert!(StatsCalculator::three_dart_average(&b).is_none());
}

/// Reset honors a non-501 starting score.
#[test]
fn test_reset_to_configured_start() {
    let engine = ScoringEngine::new(&GameConfig::new().with_starting_score(301));
    let mut player = Player::new(PlayerId::new(1), 301);
    throw_all(&engine, &mut player, &[t20()]);

    engine.reset_player(&mut player);
    assert_eq!(player.score(), 301);
}

// =============================================================================
// Double-out
// =============================================================================

/// Under double-out a single-out finish busts but a Bull finish does not.
#[test]
fn test_double_out_finishes() {
    let engine = ScoringEngine::new(&GameConfig::new().with_bust_rule(BustRule::DoubleOut));

    let mut player = Player::new(PlayerId::new(1), 60);
    let bust = engine
        .apply_throw(&mut player, num(20), Multiplier::Triple)
        .unwrap_err();
    assert_eq!(bust.reason, BustReason::NotDoubleOut);

    throw_all(
        &engine,
        &mut player,
        &[(num(10), Multiplier::Single), (Segment::Bull, Multiplier::Single)],
    );
    assert!(player.has_finished());
}
