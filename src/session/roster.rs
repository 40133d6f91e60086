//! Player roster and the active player.
//!
//! `GameSession` owns every player record. There is no separate "current"
//! copy of the active player's score or throws: queries and commands go
//! straight to the record selected by the active index.
//!
//! ## Invariants
//!
//! - At least one player at all times.
//! - Player ids are unique and never reused.
//! - The active index always points at an existing player.

use serde::Serialize;

use crate::core::{DartsError, GameConfig, Player, PlayerId};

/// All players in a session plus the active selection.
///
/// ## Example
///
/// ```
/// use rust_darts::core::PlayerId;
/// use rust_darts::session::GameSession;
///
/// let mut session = GameSession::new(501);
/// let second = session.add_player();
/// assert_eq!(second, PlayerId::new(2));
///
/// assert!(session.switch_active(second));
/// assert_eq!(session.active().id(), second);
///
/// session.remove_player(second);
/// assert_eq!(session.active().id(), PlayerId::new(1));
/// assert!(session.remove_player(PlayerId::new(1)).is_none());
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct GameSession {
    players: Vec<Player>,
    active: usize,
    next_player_id: u32,
    starting_score: u32,
}

impl GameSession {
    /// Create a session with a single player, "Player 1", active.
    #[must_use]
    pub fn new(starting_score: u32) -> Self {
        Self {
            players: vec![Player::new(PlayerId::new(1), starting_score)],
            active: 0,
            next_player_id: 2,
            starting_score,
        }
    }

    /// Create a session for a validated configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self, DartsError> {
        config.validate()?;
        Ok(Self::new(config.starting_score))
    }

    /// Players in the order they were added.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false; a session never has zero players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.get(id).is_some()
    }

    fn position(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id() == id)
    }

    #[must_use]
    pub fn active_id(&self) -> PlayerId {
        self.players[self.active].id()
    }

    #[must_use]
    pub fn active(&self) -> &Player {
        &self.players[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Player {
        &mut self.players[self.active]
    }

    /// Id the next added player will receive.
    #[must_use]
    pub fn next_player_id(&self) -> PlayerId {
        PlayerId::new(self.next_player_id)
    }

    /// Append a fresh player and return its id.
    ///
    /// The roster itself is unbounded; caps are the caller's business.
    pub fn add_player(&mut self) -> PlayerId {
        let id = PlayerId::new(self.next_player_id);
        self.next_player_id += 1;
        self.players.push(Player::new(id, self.starting_score));

        log::info!("added {id} ({} players)", self.players.len());
        id
    }

    /// Remove a player.
    ///
    /// Returns `None` (and changes nothing) when `id` is unknown or is the
    /// only player left. Removing the active player activates the first
    /// remaining one.
    pub fn remove_player(&mut self, id: PlayerId) -> Option<Player> {
        if self.players.len() <= 1 {
            log::debug!("refusing to remove {id}: last player");
            return None;
        }
        let index = self.position(id)?;
        let removed = self.players.remove(index);

        if index == self.active {
            self.active = 0;
        } else if index < self.active {
            self.active -= 1;
        }

        log::info!("removed {id}, {} active", self.active_id());
        Some(removed)
    }

    /// Make `id` the active player.
    ///
    /// Returns false when `id` is already active or not in the roster. The
    /// outgoing player's pending multiplier stays in its own record.
    pub fn switch_active(&mut self, id: PlayerId) -> bool {
        if self.active_id() == id {
            return false;
        }
        let Some(index) = self.position(id) else {
            log::debug!("ignoring switch to unknown {id}");
            return false;
        };

        log::info!("switched active player {} -> {id}", self.active_id());
        self.active = index;
        true
    }

    /// Give a player a display name. Returns false for an unknown id.
    pub fn rename_player(&mut self, id: PlayerId, name: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(player) => {
                player.set_name(name);
                true
            }
            None => false,
        }
    }
}
