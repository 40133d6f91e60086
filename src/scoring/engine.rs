//! Applying and reversing throws.
//!
//! `ScoringEngine` is the only code that mutates a player's score, throw log
//! and aggregates. Every scored throw is exactly reversed by
//! [`ScoringEngine::undo_last_throw`]; a bust leaves the record untouched
//! apart from resetting the pending multiplier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{BustRule, GameConfig, Multiplier, Player, ResetPolicy, Segment, Throw};

/// Why a throw was voided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BustReason {
    /// The throw was worth more than the remaining score.
    BelowZero,
    /// Double-out only: the throw would leave 1, which cannot be finished.
    LeftOnOne,
    /// Double-out only: the throw reached zero without a double or Bull.
    NotDoubleOut,
}

impl fmt::Display for BustReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowZero => f.write_str("score would go below zero"),
            Self::LeftOnOne => f.write_str("score would be left on 1"),
            Self::NotDoubleOut => f.write_str("finish must be on a double or Bull"),
        }
    }
}

/// A voided throw. The player's score is unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bust {
    /// Remaining score, the same as before the throw.
    pub score: u32,
    /// The throw that was voided. It is not in the player's log.
    pub throw: Throw,
    pub reason: BustReason,
}

impl fmt::Display for Bust {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bust on {} from {}: {}", self.throw, self.score, self.reason)
    }
}

impl std::error::Error for Bust {}

/// Applies the scoring rules of one game configuration.
///
/// ## Example
///
/// ```
/// use rust_darts::core::{GameConfig, Multiplier, Player, PlayerId, Segment};
/// use rust_darts::scoring::ScoringEngine;
///
/// let engine = ScoringEngine::new(&GameConfig::default());
/// let mut player = Player::new(PlayerId::new(1), 501);
///
/// let throw = engine.apply_throw(&mut player, Segment::number(20).unwrap(), Multiplier::Triple).unwrap();
/// assert_eq!(throw.display(), "T20");
/// assert_eq!(player.score(), 441);
///
/// engine.undo_last_throw(&mut player);
/// assert_eq!(player.score(), 501);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoringEngine {
    starting_score: u32,
    bust_rule: BustRule,
    reset_policy: ResetPolicy,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl ScoringEngine {
    /// Create an engine for the given configuration.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            starting_score: config.starting_score,
            bust_rule: config.bust_rule,
            reset_policy: config.reset_policy,
        }
    }

    #[must_use]
    pub fn starting_score(&self) -> u32 {
        self.starting_score
    }

    /// Decide whether `throw` busts from `score`.
    #[must_use]
    pub fn bust_reason(&self, score: u32, throw: &Throw) -> Option<BustReason> {
        let Some(left) = score.checked_sub(throw.value()) else {
            return Some(BustReason::BelowZero);
        };

        match self.bust_rule {
            BustRule::BelowZero => None,
            BustRule::DoubleOut if left == 1 => Some(BustReason::LeftOnOne),
            // A miss from zero leaves zero; nothing was finished by it.
            BustRule::DoubleOut if left == 0 && throw.value() > 0 && !throw.is_double_out() => {
                Some(BustReason::NotDoubleOut)
            }
            BustRule::DoubleOut => None,
        }
    }

    /// Score a throw against the player.
    ///
    /// On success the score drops by the throw's value, the throw is
    /// appended and the aggregates grow. On a bust nothing changes. Either
    /// way the pending multiplier returns to single.
    pub fn apply_throw(
        &self,
        player: &mut Player,
        segment: Segment,
        multiplier: Multiplier,
    ) -> Result<Throw, Bust> {
        let throw = Throw::new(segment, multiplier);
        player.pending_multiplier = Multiplier::Single;

        if let Some(reason) = self.bust_reason(player.score, &throw) {
            log::debug!("{}: bust on {} from {} ({})", player.id, throw, player.score, reason);
            return Err(Bust {
                score: player.score,
                throw,
                reason,
            });
        }

        player.score -= throw.value();
        player.throws.push_back(throw.clone());
        player.total_darts_thrown += 1;
        player.total_score_accumulated += u64::from(throw.value());

        log::debug!("{}: {} scored {}, {} left", player.id, throw, throw.value(), player.score);
        Ok(throw)
    }

    /// Score a throw using the player's pending multiplier.
    pub fn apply_selected(&self, player: &mut Player, segment: Segment) -> Result<Throw, Bust> {
        let multiplier = player.pending_multiplier;
        self.apply_throw(player, segment, multiplier)
    }

    /// Remove the most recent throw and restore everything it changed.
    ///
    /// Returns `None` when there is nothing to undo.
    pub fn undo_last_throw(&self, player: &mut Player) -> Option<Throw> {
        let throw = player.throws.pop_back()?;

        player.score += throw.value();
        player.total_darts_thrown = player.total_darts_thrown.saturating_sub(1);
        player.total_score_accumulated = player
            .total_score_accumulated
            .saturating_sub(u64::from(throw.value()));

        log::debug!("{}: undid {}, back to {}", player.id, throw, player.score);
        Some(throw)
    }

    /// Start the player over from the starting score.
    ///
    /// Cumulative aggregates are kept or cleared per the reset policy.
    pub fn reset_player(&self, player: &mut Player) {
        player.score = self.starting_score;
        player.throws.clear();
        player.pending_multiplier = Multiplier::Single;

        if self.reset_policy == ResetPolicy::ClearStats {
            player.total_darts_thrown = 0;
            player.total_score_accumulated = 0;
        }

        log::debug!("{}: reset to {} ({:?})", player.id, self.starting_score, self.reset_policy);
    }

    /// Choose the multiplier for the player's next throw.
    pub fn select_multiplier(&self, player: &mut Player, multiplier: Multiplier) {
        player.pending_multiplier = multiplier;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn num(n: u8) -> Segment {
        Segment::number(n).unwrap()
    }

    fn player_at(score: u32) -> Player {
        Player::new(PlayerId::new(1), score)
    }

    #[test]
    fn test_apply_throw_updates_record() {
        let engine = ScoringEngine::default();
        let mut player = player_at(501);

        let throw = engine
            .apply_throw(&mut player, num(20), Multiplier::Triple)
            .unwrap();

        assert_eq!(throw.value(), 60);
        assert_eq!(player.score(), 441);
        assert_eq!(player.throws().len(), 1);
        assert_eq!(player.total_darts_thrown(), 1);
        assert_eq!(player.total_score_accumulated(), 60);
    }

    #[test]
    fn test_bust_leaves_record_unchanged() {
        let engine = ScoringEngine::default();
        let mut player = player_at(5);
        engine.select_multiplier(&mut player, Multiplier::Triple);

        let bust = engine
            .apply_selected(&mut player, num(20))
            .unwrap_err();

        assert_eq!(bust.score, 5);
        assert_eq!(bust.throw.value(), 60);
        assert_eq!(bust.reason, BustReason::BelowZero);
        assert_eq!(player.score(), 5);
        assert!(player.throws().is_empty());
        assert_eq!(player.total_darts_thrown(), 0);
        assert_eq!(player.pending_multiplier(), Multiplier::Single);
    }

    #[test]
    fn test_exact_zero_allowed_below_zero_rule() {
        let engine = ScoringEngine::default();
        let mut player = player_at(20);

        assert!(engine.apply_throw(&mut player, num(20), Multiplier::Single).is_ok());
        assert!(player.has_finished());
    }

    #[test]
    fn test_double_out_rule() {
        let engine = ScoringEngine::new(&GameConfig::new().with_bust_rule(BustRule::DoubleOut));

        let mut player = player_at(20);
        let bust = engine
            .apply_throw(&mut player, num(20), Multiplier::Single)
            .unwrap_err();
        assert_eq!(bust.reason, BustReason::NotDoubleOut);

        let bust = engine
            .apply_throw(&mut player, num(19), Multiplier::Single)
            .unwrap_err();
        assert_eq!(bust.reason, BustReason::LeftOnOne);

        assert!(engine.apply_throw(&mut player, num(10), Multiplier::Double).is_ok());
        assert!(player.has_finished());

        let mut player = player_at(50);
        assert!(engine.apply_throw(&mut player, Segment::Bull, Multiplier::Single).is_ok());
    }

    #[test]
    fn test_miss_after_finish_is_not_a_bust() {
        let engine = ScoringEngine::new(&GameConfig::new().with_bust_rule(BustRule::DoubleOut));
        let mut player = player_at(0);
        assert!(engine.apply_throw(&mut player, Segment::Miss, Multiplier::Single).is_ok());
    }

    #[test]
    fn test_undo_is_inverse() {
        let engine = ScoringEngine::default();
        let mut player = player_at(501);
        engine.apply_throw(&mut player, num(19), Multiplier::Double).unwrap();
        let before = player.clone();

        engine.apply_throw(&mut player, Segment::Bull, Multiplier::Single).unwrap();
        let undone = engine.undo_last_throw(&mut player).unwrap();

        assert_eq!(undone.display(), "Bull");
        assert_eq!(player, before);
    }

    #[test]
    fn test_undo_empty_is_noop() {
        let engine = ScoringEngine::default();
        let mut player = player_at(501);
        let before = player.clone();

        assert!(engine.undo_last_throw(&mut player).is_none());
        assert_eq!(player, before);
    }

    #[test]
    fn test_reset_keeps_stats_by_default() {
        let engine = ScoringEngine::default();
        let mut player = player_at(501);
        engine.apply_throw(&mut player, num(20), Multiplier::Triple).unwrap();

        engine.reset_player(&mut player);

        assert_eq!(player.score(), 501);
        assert!(player.throws().is_empty());
        assert_eq!(player.total_darts_thrown(), 1);
        assert_eq!(player.total_score_accumulated(), 60);
    }

    #[test]
    fn test_reset_to_configured_start() {
        let engine = ScoringEngine::new(&GameConfig::new().with_starting_score(301));
        assert_eq!(engine.starting_score(), 301);

        let mut player = player_at(301);
        engine.apply_throw(&mut player, num(19), Multiplier::Triple).unwrap();
        engine.reset_player(&mut player);
        assert_eq!(player.score(), engine.starting_score());
    }

    #[test]
    fn test_reset_clear_stats_policy() {
        let engine = ScoringEngine::new(&GameConfig::new().with_reset_policy(ResetPolicy::ClearStats));
        let mut player = player_at(501);
        engine.apply_throw(&mut player, num(20), Multiplier::Triple).unwrap();

        engine.reset_player(&mut player);

        assert_eq!(player.score(), 501);
        assert!(player.throws().is_empty());
        assert_eq!(player.total_darts_thrown(), 0);
        assert_eq!(player.total_score_accumulated(), 0);
    }

    #[test]
    fn test_bust_display() {
        let engine = ScoringEngine::default();
        let mut player = player_at(5);
        let bust = engine
            .apply_throw(&mut player, num(20), Multiplier::Triple)
            .unwrap_err();
        assert_eq!(bust.to_string(), "bust on T20 from 5: score would go below zero");
    }
}
