//! Command/query boundary for a presentation layer.
//!
//! A view issues [`Command`]s and reads state back through the query
//! methods or a [`SessionSnapshot`]. It never touches players directly.
//! Everything runs synchronously: a command is fully applied, and every
//! observer notified, before `execute` returns.

use crate::checkout::{Checkout, CheckoutAdvisor};
use crate::core::{DartsError, GameConfig, Multiplier, Player, PlayerId, Segment, Throw};
use crate::scoring::{Bust, PlayerStats, ScoringEngine, StatsCalculator, ThreeDartAverage, TurnHistory};

use super::event::{SessionEvent, SessionObserver};
use super::roster::GameSession;
use super::snapshot::{PlayerSummary, SessionSnapshot};

/// Inbound commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Choose the ring for the active player's next pad press.
    SelectMultiplier(Multiplier),
    /// Throw with an explicit multiplier.
    Throw(Segment, Multiplier),
    /// Throw with the active player's pending multiplier.
    ThrowSelected(Segment),
    Undo,
    /// Restart the active player from the starting score.
    Reset,
    AddPlayer,
    RemovePlayer(PlayerId),
    SwitchPlayer(PlayerId),
    RenamePlayer(PlayerId, String),
}

/// Owns one game session and applies commands to it.
///
/// ## Example
///
/// ```
/// use rust_darts::core::{GameConfig, Multiplier, Segment};
/// use rust_darts::session::{Command, Controller};
///
/// let mut controller = Controller::new(GameConfig::default()).unwrap();
///
/// controller.execute(Command::SelectMultiplier(Multiplier::Triple));
/// controller.execute(Command::ThrowSelected(Segment::number(20).unwrap()));
///
/// let view = controller.snapshot();
/// assert_eq!(view.score, 441);
/// assert_eq!(view.throws[0].display(), "T20");
/// assert!(view.can_undo);
/// ```
pub struct Controller {
    config: GameConfig,
    session: GameSession,
    engine: ScoringEngine,
    advisor: CheckoutAdvisor<'static>,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl Controller {
    /// Start a session for `config`.
    pub fn new(config: GameConfig) -> Result<Self, DartsError> {
        let session = GameSession::from_config(&config)?;
        Ok(Self {
            engine: ScoringEngine::new(&config),
            advisor: CheckoutAdvisor::new(config.checkout_mode),
            session,
            config,
            observers: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Register an observer for state-change notifications.
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Apply a command.
    ///
    /// Returns the resulting event, or `None` when the command was a no-op
    /// (nothing to undo, last player, unknown or already-active player,
    /// roster full). Observers are only notified when an event is returned.
    pub fn execute(&mut self, command: Command) -> Option<SessionEvent> {
        let event = self.apply(command)?;
        if !self.observers.is_empty() {
            let snapshot = self.snapshot();
            for observer in &mut self.observers {
                observer.on_event(&event, &snapshot);
            }
        }
        Some(event)
    }

    fn apply(&mut self, command: Command) -> Option<SessionEvent> {
        let active = self.session.active_id();
        match command {
            Command::SelectMultiplier(multiplier) => {
                self.engine.select_multiplier(self.session.active_mut(), multiplier);
                Some(SessionEvent::MultiplierSelected { player: active, multiplier })
            }
            Command::Throw(segment, multiplier) => {
                let result = self.engine.apply_throw(self.session.active_mut(), segment, multiplier);
                Some(self.throw_event(active, result))
            }
            Command::ThrowSelected(segment) => {
                let result = self.engine.apply_selected(self.session.active_mut(), segment);
                Some(self.throw_event(active, result))
            }
            Command::Undo => {
                let throw = self.engine.undo_last_throw(self.session.active_mut())?;
                Some(SessionEvent::ThrowUndone {
                    player: active,
                    throw,
                    remaining: self.session.active().score(),
                })
            }
            Command::Reset => {
                self.engine.reset_player(self.session.active_mut());
                Some(SessionEvent::PlayerReset { player: active })
            }
            Command::AddPlayer => {
                if !self.can_add_player() {
                    log::debug!("roster full at {} players", self.session.len());
                    return None;
                }
                let player = self.session.add_player();
                Some(SessionEvent::PlayerAdded { player })
            }
            Command::RemovePlayer(id) => {
                self.session.remove_player(id)?;
                Some(SessionEvent::PlayerRemoved {
                    player: id,
                    active: self.session.active_id(),
                })
            }
            Command::SwitchPlayer(id) => self
                .session
                .switch_active(id)
                .then_some(SessionEvent::ActivePlayerChanged { from: active, to: id }),
            Command::RenamePlayer(id, name) => {
                if self.session.rename_player(id, name.clone()) {
                    Some(SessionEvent::PlayerRenamed { player: id, name })
                } else {
                    None
                }
            }
        }
    }

    fn throw_event(&self, player: PlayerId, result: Result<Throw, Bust>) -> SessionEvent {
        match result {
            Ok(throw) => SessionEvent::ThrowScored {
                player,
                throw,
                remaining: self.session.active().score(),
            },
            Err(bust) => SessionEvent::Bust { player, bust },
        }
    }

    // === Command shorthands ===

    /// Throw at `segment` with `multiplier` for the active player.
    pub fn throw(&mut self, segment: Segment, multiplier: Multiplier) -> Option<SessionEvent> {
        self.execute(Command::Throw(segment, multiplier))
    }

    pub fn undo(&mut self) -> Option<SessionEvent> {
        self.execute(Command::Undo)
    }

    pub fn reset(&mut self) -> Option<SessionEvent> {
        self.execute(Command::Reset)
    }

    pub fn add_player(&mut self) -> Option<PlayerId> {
        match self.execute(Command::AddPlayer)? {
            SessionEvent::PlayerAdded { player } => Some(player),
            _ => None,
        }
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Option<SessionEvent> {
        self.execute(Command::RemovePlayer(id))
    }

    pub fn switch_player(&mut self, id: PlayerId) -> Option<SessionEvent> {
        self.execute(Command::SwitchPlayer(id))
    }

    // === Queries ===

    #[must_use]
    pub fn active_player(&self) -> &Player {
        self.session.active()
    }

    /// Remaining score of the active player.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.session.active().score()
    }

    /// Per-turn grouping of the active player's throws.
    #[must_use]
    pub fn turns(&self) -> TurnHistory {
        TurnHistory::for_player(self.session.active())
    }

    /// Running three-dart average of the active player.
    #[must_use]
    pub fn average(&self) -> Option<ThreeDartAverage> {
        StatsCalculator::three_dart_average(self.session.active())
    }

    #[must_use]
    pub fn stats(&self) -> PlayerStats {
        StatsCalculator::player_stats(self.session.active())
    }

    /// Checkout suggestions for the active player; empty means no finish.
    #[must_use]
    pub fn checkouts(&self) -> Vec<Checkout> {
        self.advisor.suggest_for(self.session.active())
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.session.active().can_undo()
    }

    #[must_use]
    pub fn can_add_player(&self) -> bool {
        self.config
            .max_players
            .map_or(true, |max| self.session.len() < max)
    }

    /// All outbound queries in one value.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let active = self.session.active();
        SessionSnapshot {
            active_player: active.id(),
            active_name: active.name().to_string(),
            score: active.score(),
            pending_multiplier: active.pending_multiplier(),
            throws: active.throws().clone(),
            turns: self.turns().into_iter().collect(),
            average: self.average(),
            checkouts: self.checkouts().iter().map(ToString::to_string).collect(),
            darts_left_in_turn: active.darts_left_in_turn(),
            can_undo: active.can_undo(),
            finished: active.has_finished(),
            roster: self
                .session
                .players()
                .iter()
                .map(|p| PlayerSummary {
                    id: p.id(),
                    name: p.name().to_string(),
                    score: p.score(),
                    active: p.id() == active.id(),
                })
                .collect(),
            can_add_player: self.can_add_player(),
            can_remove_player: self.session.len() > 1,
        }
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("config", &self.config)
            .field("session", &self.session)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn num(n: u8) -> Segment {
        Segment::number(n).unwrap()
    }

    fn controller() -> Controller {
        Controller::new(GameConfig::default()).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(Controller::new(GameConfig::new().with_starting_score(0)).is_err());
    }

    #[test]
    fn test_initial_snapshot() {
        let view = controller().snapshot();

        assert_eq!(view.active_player, PlayerId::new(1));
        assert_eq!(view.active_name, "Player 1");
        assert_eq!(view.score, 501);
        assert!(view.throws.is_empty());
        assert!(view.turns.is_empty());
        assert!(view.average.is_none());
        assert!(view.checkouts.is_empty());
        assert_eq!(view.darts_left_in_turn, 3);
        assert!(!view.can_undo);
        assert!(view.can_add_player);
        assert!(!view.can_remove_player);
        assert_eq!(view.roster.len(), 1);
    }

    #[test]
    fn test_throw_selected_uses_pending_multiplier() {
        let mut c = controller();
        c.execute(Command::SelectMultiplier(Multiplier::Double));
        let event = c.execute(Command::ThrowSelected(num(16))).unwrap();

        match event {
            SessionEvent::ThrowScored { throw, remaining, .. } => {
                assert_eq!(throw.display(), "D16");
                assert_eq!(remaining, 469);
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert_eq!(c.active_player().pending_multiplier(), Multiplier::Single);
    }

    #[test]
    fn test_bust_event() {
        let mut c = Controller::new(GameConfig::new().with_starting_score(5)).unwrap();
        let event = c.throw(num(20), Multiplier::Triple).unwrap();

        assert!(matches!(event, SessionEvent::Bust { ref bust, .. } if bust.score == 5));
        assert_eq!(c.score(), 5);
        assert!(!c.can_undo());
    }

    #[test]
    fn test_stats_query() {
        let mut c = Controller::new(GameConfig::new().with_starting_score(301)).unwrap();
        assert_eq!(c.config().starting_score, 301);

        for _ in 0..3 {
            c.throw(num(20), Multiplier::Triple);
        }
        c.throw(num(20), Multiplier::Single);

        let stats = c.stats();
        assert_eq!(stats.darts_thrown, 4);
        assert_eq!(stats.total_scored, 200);
        assert_eq!(stats.highest_turn, Some(180));
        assert_eq!(stats.turns_played, 2);
        assert_eq!(stats.three_dart_average.unwrap().to_string(), "150.00");
        assert_eq!(stats.three_dart_average, c.average());
    }

    #[test]
    fn test_undo_noop_returns_none() {
        let mut c = controller();
        assert!(c.undo().is_none());
    }

    #[test]
    fn test_roster_cap() {
        let mut c = Controller::new(GameConfig::new().with_max_players(2)).unwrap();
        assert_eq!(c.add_player(), Some(PlayerId::new(2)));
        assert_eq!(c.add_player(), None);
        assert!(!c.snapshot().can_add_player);
    }

    #[test]
    fn test_rename_event() {
        let mut c = controller();
        let event = c.execute(Command::RenamePlayer(PlayerId::new(1), "Ana".into()));
        assert_eq!(
            event,
            Some(SessionEvent::PlayerRenamed { player: PlayerId::new(1), name: "Ana".into() })
        );
        assert_eq!(c.snapshot().active_name, "Ana");
        assert!(c.execute(Command::RenamePlayer(PlayerId::new(7), "Ghost".into())).is_none());
    }

    #[test]
    fn test_observers_only_see_changes() {
        let seen: Rc<RefCell<Vec<(SessionEvent, u32)>>> = Rc::default();
        let sink = Rc::clone(&seen);

        let mut c = controller();
        c.subscribe(move |event: &SessionEvent, snapshot: &SessionSnapshot| {
            sink.borrow_mut().push((event.clone(), snapshot.score));
        });

        c.undo(); // no-op
        c.throw(num(20), Multiplier::Triple);
        c.switch_player(PlayerId::new(1)); // no-op

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].1, 441);
        assert_eq!(seen[0].0.player(), PlayerId::new(1));
    }

    #[test]
    fn test_debug_does_not_require_observer_debug() {
        let mut c = controller();
        c.subscribe(|_: &SessionEvent, _: &SessionSnapshot| {});
        assert!(format!("{c:?}").contains("observers: 1"));
    }
}
