//! Read-only views handed to the presentation layer.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Multiplier, PlayerId, Throw};
use crate::scoring::{ThreeDartAverage, Turn};

/// One roster entry, as shown on a player tab.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
    pub active: bool,
}

/// Everything a view needs to render the active player after a command.
///
/// The throw log is an `im::Vector`, so taking a snapshot does not copy it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub active_player: PlayerId,
    pub active_name: String,
    /// Remaining score of the active player.
    pub score: u32,
    pub pending_multiplier: Multiplier,
    /// Throw history, oldest first; each carries its display label.
    pub throws: Vector<Throw>,
    pub turns: Vec<Turn>,
    /// `None` until the active player has thrown a dart.
    pub average: Option<ThreeDartAverage>,
    /// Checkout suggestions; empty means "no finish".
    pub checkouts: Vec<String>,
    pub darts_left_in_turn: usize,
    pub can_undo: bool,
    pub finished: bool,
    pub roster: Vec<PlayerSummary>,
    /// False once the configured roster cap is reached.
    pub can_add_player: bool,
    /// False while only one player remains.
    pub can_remove_player: bool,
}
