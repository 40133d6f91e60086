//! Grouping a throw log into turns.
//!
//! Consecutive throws are split into groups of three; the last group holds
//! whatever is left over (1 or 2 throws) when the log length is not a
//! multiple of three. Pure derivation, recomputed on demand.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Player, Throw, DARTS_PER_TURN};

/// One turn of up to three throws.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// 1-based turn index.
    pub number: usize,
    pub throws: SmallVec<[Throw; 3]>,
    /// Sum of the throws' values.
    pub total: u32,
}

impl Turn {
    /// Whether all three darts of the turn have been thrown.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.throws.len() == DARTS_PER_TURN
    }
}

impl std::fmt::Display for Turn {
    /// `Turn 2: T20 19 D8 = 95`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Turn {}:", self.number)?;
        for throw in &self.throws {
            write!(f, " {throw}")?;
        }
        write!(f, " = {}", self.total)
    }
}

/// A throw log partitioned into turns.
///
/// ## Example
///
/// ```
/// use rust_darts::core::{Player, PlayerId, Multiplier, Segment};
/// use rust_darts::scoring::{ScoringEngine, TurnHistory};
///
/// let engine = ScoringEngine::default();
/// let mut player = Player::new(PlayerId::new(1), 501);
/// for _ in 0..4 {
///     engine.apply_throw(&mut player, Segment::number(20).unwrap(), Multiplier::Triple).unwrap();
/// }
///
/// let history = TurnHistory::for_player(&player);
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.turns()[0].total, 180);
/// assert_eq!(history.turns()[1].throws.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnHistory {
    turns: Vec<Turn>,
}

impl TurnHistory {
    /// Group an ordered sequence of throws.
    pub fn from_throws<'a>(throws: impl IntoIterator<Item = &'a Throw>) -> Self {
        let mut turns = Vec::new();
        let mut current: SmallVec<[Throw; 3]> = SmallVec::new();

        for throw in throws {
            current.push(throw.clone());
            if current.len() == DARTS_PER_TURN {
                turns.push(Self::close_turn(turns.len() + 1, std::mem::take(&mut current)));
            }
        }
        if !current.is_empty() {
            turns.push(Self::close_turn(turns.len() + 1, current));
        }

        Self { turns }
    }

    /// Group a player's throw log.
    #[must_use]
    pub fn for_player(player: &Player) -> Self {
        Self::from_throws(player.throws())
    }

    fn close_turn(number: usize, throws: SmallVec<[Throw; 3]>) -> Turn {
        let total = throws.iter().map(Throw::value).sum();
        Turn { number, throws, total }
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter()
    }

    /// The turn in progress, or the last completed one.
    #[must_use]
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Best turn total so far.
    #[must_use]
    pub fn highest_total(&self) -> Option<u32> {
        self.turns.iter().map(|t| t.total).max()
    }
}

impl IntoIterator for TurnHistory {
    type Item = Turn;
    type IntoIter = std::vec::IntoIter<Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.into_iter()
    }
}
