//! Checkout advisor integration tests.
//!
//! These tests verify suggestions follow a player through a turn and that
//! the curated and exhaustive sources agree where they overlap.

use rust_darts::checkout::{generator, CheckoutAdvisor, CheckoutTable, MAX_CHECKOUT, MIN_CHECKOUT};
use rust_darts::core::{CheckoutMode, Multiplier, Player, PlayerId, Segment};
use rust_darts::scoring::ScoringEngine;

fn num(n: u8) -> Segment {
    Segment::number(n).unwrap()
}

fn curated() -> CheckoutAdvisor<'static> {
    CheckoutAdvisor::new(CheckoutMode::Curated)
}

/// Reference suggestions at the edges of the range.
#[test]
fn test_reference_suggestions() {
    assert_eq!(curated().suggest_labels(170, 3), ["T20 T20 Bull"]);
    assert_eq!(curated().suggest_labels(40, 1), ["D20"]);
    assert!(curated().suggest_labels(1, 3).is_empty());
    assert!(curated().suggest_labels(171, 3).is_empty());
}

/// Suggestions narrow as darts are used within a turn.
#[test]
fn test_suggestions_follow_turn() {
    let engine = ScoringEngine::default();
    let advisor = curated();
    let mut player = Player::new(PlayerId::new(1), 100);

    assert_eq!(
        advisor.suggest_for(&player).iter().map(ToString::to_string).collect::<Vec<_>>(),
        ["T20 D20"]
    );

    engine
        .apply_throw(&mut player, num(20), Multiplier::Triple)
        .unwrap();
    assert_eq!(player.score(), 40);
    assert_eq!(player.darts_left_in_turn(), 2);
    assert_eq!(advisor.suggest_for(&player)[0].to_string(), "D20");

    engine
        .apply_throw(&mut player, num(20), Multiplier::Single)
        .unwrap();
    assert_eq!(player.score(), 20);
    assert_eq!(player.darts_left_in_turn(), 1);
    assert_eq!(advisor.suggest_for(&player)[0].to_string(), "D10");
}

/// After a bust, suggestions reflect the unchanged score.
#[test]
fn test_suggestions_after_bust() {
    let engine = ScoringEngine::default();
    let advisor = curated();
    let mut player = Player::new(PlayerId::new(1), 32);
    let before = advisor.suggest_for(&player);

    assert!(engine
        .apply_throw(&mut player, Segment::Bull, Multiplier::Single)
        .is_err());
    assert_eq!(advisor.suggest_for(&player), before);
}

/// Every one-dart curated suggestion is also found by the generator.
#[test]
fn test_curated_one_dart_outs_match_generator() {
    let table = CheckoutTable::curated();
    for score in MIN_CHECKOUT..=MAX_CHECKOUT {
        for checkout in table.lookup(score).iter().filter(|c| c.len() == 1) {
            let generated = generator::finishes(score, 1, 10);
            assert!(generated.contains(checkout), "{score}: {checkout}");
        }
    }
}

/// The generator finds a finish for every score the curated table covers.
#[test]
fn test_generator_covers_curated_scores() {
    let table = CheckoutTable::curated();
    for (score, checkouts) in table.iter() {
        if checkouts.is_empty() {
            continue;
        }
        let shortest = checkouts.iter().map(|c| c.len()).min().unwrap();
        assert!(
            !generator::finishes(score, shortest, 1).is_empty(),
            "no {shortest}-dart finish generated for {score}"
        );
    }
}

/// Exhaustive mode lists alternatives the curated table omits.
#[test]
fn test_exhaustive_beyond_curated() {
    let exhaustive = CheckoutAdvisor::new(CheckoutMode::Exhaustive { limit: 50 });

    // Curated lists one 2-dart 80 finish; there are several.
    assert_eq!(curated().suggest(80, 2).len(), 1);
    assert!(exhaustive.suggest(80, 2).len() > 1);

    for checkout in exhaustive.suggest(80, 2) {
        assert_eq!(checkout.total(), 80);
        assert!(checkout.len() <= 2);
    }
}
