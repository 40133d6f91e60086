//! Game configuration.
//!
//! `GameConfig` selects the X01 variant and the behaviors that differ
//! between house rules:
//! - `ResetPolicy`: whether a reset also wipes lifetime stats
//! - `BustRule`: plain below-zero busting or strict double-out
//! - `CheckoutMode`: curated table, combinatorial generator, or both

use serde::{Deserialize, Serialize};

use super::error::DartsError;

/// Standard X01 starting score.
pub const STARTING_SCORE: u32 = 501;

/// Darts in one turn.
pub const DARTS_PER_TURN: usize = 3;

/// What `reset` does to a player's cumulative aggregates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetPolicy {
    /// Score and throws reset; `total_darts_thrown` and
    /// `total_score_accumulated` carry over, so the average spans games.
    #[default]
    KeepStats,
    /// Aggregates are zeroed too; the player is indistinguishable from a
    /// freshly added one apart from id and name.
    ClearStats,
}

/// When a throw is voided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BustRule {
    /// Bust only when the score would go negative.
    #[default]
    BelowZero,
    /// Also bust when the throw leaves 1, or reaches 0 on a dart that is
    /// not a double or the Bull.
    DoubleOut,
}

/// Where checkout suggestions come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutMode {
    /// The hand-authored table only.
    #[default]
    Curated,
    /// Every legal finish, fewest darts first, at most `limit` of them.
    Exhaustive { limit: usize },
    /// The table when it has a suggestion for the darts left, otherwise
    /// the generator.
    CuratedWithFallback { limit: usize },
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Score every player starts (and resets) at.
    pub starting_score: u32,

    /// Effect of reset on cumulative aggregates.
    pub reset_policy: ResetPolicy,

    /// Which throws are voided.
    pub bust_rule: BustRule,

    /// Source of checkout suggestions.
    pub checkout_mode: CheckoutMode,

    /// Roster cap applied by the controller. `None` for unlimited.
    pub max_players: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_score: STARTING_SCORE,
            reset_policy: ResetPolicy::default(),
            bust_rule: BustRule::default(),
            checkout_mode: CheckoutMode::default(),
            max_players: None,
        }
    }
}

impl GameConfig {
    /// Create the default 501 configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting score (301, 501, 701, ...).
    #[must_use]
    pub fn with_starting_score(mut self, score: u32) -> Self {
        self.starting_score = score;
        self
    }

    #[must_use]
    pub fn with_reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }

    #[must_use]
    pub fn with_bust_rule(mut self, rule: BustRule) -> Self {
        self.bust_rule = rule;
        self
    }

    #[must_use]
    pub fn with_checkout_mode(mut self, mode: CheckoutMode) -> Self {
        self.checkout_mode = mode;
        self
    }

    /// Cap the roster size.
    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        self.max_players = Some(max);
        self
    }

    /// Check the configuration can start a game.
    pub fn validate(&self) -> Result<(), DartsError> {
        if self.starting_score == 0 {
            return Err(DartsError::InvalidStartingScore(self.starting_score));
        }
        Ok(())
    }
}
