//! # rust-darts
//!
//! A turn-based X01 (501, 301, ...) scoring and checkout-suggestion engine,
//! independent of any user interface.
//!
//! ## Design Principles
//!
//! 1. **One owner of state**: a `GameSession` holds every player record.
//!    There is no mirrored "current score"; the active player is an index
//!    into the roster.
//!
//! 2. **Commands in, snapshots out**: a presentation layer sends `Command`s
//!    to a `Controller` and renders `SessionSnapshot`s, either by polling or
//!    by subscribing a `SessionObserver`.
//!
//! 3. **Closed types**: segments are `Number(1..=20) | Bull | Miss`,
//!    multipliers are `Single | Double | Triple`. Invalid raw input is
//!    rejected at the edge with a `DartsError`.
//!
//! 4. **Busts are values**: a voided throw is reported as `Err(Bust)` and
//!    leaves the player's record untouched.
//!
//! ## Modules
//!
//! - `core`: segments, throws, players, configuration, errors
//! - `checkout`: curated table, exhaustive generator, advisor
//! - `scoring`: scoring engine, turn history, statistics
//! - `session`: roster, controller, events, snapshots
//!
//! All state lives in memory for a single session; nothing is persisted.

pub mod checkout;
pub mod core;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BoardNumber, BustRule, CheckoutMode, DartsError, GameConfig, Multiplier, Player, PlayerId, ResetPolicy,
    Segment, Throw,
};

pub use crate::checkout::{Checkout, CheckoutAdvisor, CheckoutTable, Dart};

pub use crate::scoring::{
    Bust, BustReason, PlayerStats, ScoringEngine, StatsCalculator, ThreeDartAverage, Turn,
    TurnHistory,
};

pub use crate::session::{
    Command, Controller, GameSession, PlayerSummary, SessionEvent, SessionObserver,
    SessionSnapshot,
};
