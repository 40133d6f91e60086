//! Player identification and per-player scoring record.
//!
//! ## PlayerId
//!
//! Session-unique identifier. Ids are handed out by the session from a
//! monotonically increasing counter and are never reused, even after the
//! player is removed.
//!
//! ## Player
//!
//! Remaining score, the ordered throw log, the pending multiplier and the
//! cumulative aggregates used for the average. Fields are only mutated by
//! [`crate::scoring::ScoringEngine`] and the session roster.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::DARTS_PER_TURN;
use super::segment::Multiplier;
use super::throw::Throw;

/// Session-unique player identifier. The first player is `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One player's scoring record.
///
/// Uses `im::Vector` for the throw log so snapshots clone in O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) name: String,
    pub(crate) score: u32,
    pub(crate) throws: Vector<Throw>,
    pub(crate) pending_multiplier: Multiplier,
    pub(crate) total_darts_thrown: u64,
    pub(crate) total_score_accumulated: u64,
}

impl Player {
    /// Create a fresh player named after its id ("Player 3").
    #[must_use]
    pub fn new(id: PlayerId, starting_score: u32) -> Self {
        Self {
            id,
            name: id.to_string(),
            score: starting_score,
            throws: Vector::new(),
            pending_multiplier: Multiplier::Single,
            total_darts_thrown: 0,
            total_score_accumulated: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Remaining score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Ordered throw log, oldest first.
    #[must_use]
    pub fn throws(&self) -> &Vector<Throw> {
        &self.throws
    }

    /// Most recent throw, if any.
    #[must_use]
    pub fn last_throw(&self) -> Option<&Throw> {
        self.throws.last()
    }

    /// Multiplier that the next pad press will use.
    #[must_use]
    pub fn pending_multiplier(&self) -> Multiplier {
        self.pending_multiplier
    }

    #[must_use]
    pub fn total_darts_thrown(&self) -> u64 {
        self.total_darts_thrown
    }

    #[must_use]
    pub fn total_score_accumulated(&self) -> u64 {
        self.total_score_accumulated
    }

    /// Whether there is a throw to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.throws.is_empty()
    }

    /// Darts already thrown in the current turn (0-2).
    #[must_use]
    pub fn darts_thrown_this_turn(&self) -> usize {
        self.throws.len() % DARTS_PER_TURN
    }

    /// Darts remaining in the current turn (1-3).
    #[must_use]
    pub fn darts_left_in_turn(&self) -> usize {
        DARTS_PER_TURN - self.darts_thrown_this_turn()
    }

    /// Whether the player has checked out (score exactly zero).
    #[must_use]
    pub fn has_finished(&self) -> bool {
        self.score == 0
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
