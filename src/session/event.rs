//! State-change notifications.
//!
//! The controller emits one `SessionEvent` per command that changed state
//! and hands it to every subscribed `SessionObserver`, together with a
//! fresh snapshot. Commands that turn out to be no-ops emit nothing.

use serde::{Deserialize, Serialize};

use super::snapshot::SessionSnapshot;
use crate::core::{Multiplier, PlayerId, Throw};
use crate::scoring::Bust;

/// What a command changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    MultiplierSelected {
        player: PlayerId,
        multiplier: Multiplier,
    },
    ThrowScored {
        player: PlayerId,
        throw: Throw,
        remaining: u32,
    },
    /// The throw was voided; only the pending multiplier changed.
    Bust {
        player: PlayerId,
        bust: Bust,
    },
    ThrowUndone {
        player: PlayerId,
        throw: Throw,
        remaining: u32,
    },
    PlayerReset {
        player: PlayerId,
    },
    PlayerAdded {
        player: PlayerId,
    },
    PlayerRemoved {
        player: PlayerId,
        /// Active player after the removal.
        active: PlayerId,
    },
    ActivePlayerChanged {
        from: PlayerId,
        to: PlayerId,
    },
    PlayerRenamed {
        player: PlayerId,
        name: String,
    },
}

impl SessionEvent {
    /// The player the event is about.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            Self::MultiplierSelected { player, .. }
            | Self::ThrowScored { player, .. }
            | Self::Bust { player, .. }
            | Self::ThrowUndone { player, .. }
            | Self::PlayerReset { player }
            | Self::PlayerAdded { player }
            | Self::PlayerRemoved { player, .. }
            | Self::PlayerRenamed { player, .. } => *player,
            Self::ActivePlayerChanged { to, .. } => *to,
        }
    }
}

/// Receives state-change notifications.
///
/// Closures of the form `FnMut(&SessionEvent, &SessionSnapshot)` implement
/// this trait directly.
pub trait SessionObserver {
    /// Called after `event` has been applied; `snapshot` is the new state.
    fn on_event(&mut self, event: &SessionEvent, snapshot: &SessionSnapshot);
}

impl<F> SessionObserver for F
where
    F: FnMut(&SessionEvent, &SessionSnapshot),
{
    fn on_event(&mut self, event: &SessionEvent, snapshot: &SessionSnapshot) {
        self(event, snapshot);
    }
}
