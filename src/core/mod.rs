//! Core value types: segments, throws, players, configuration, errors.
//!
//! Everything here is plain data. Mutation rules live in `scoring`, roster
//! lifecycle in `session`.

pub mod config;
pub mod error;
pub mod player;
pub mod segment;
pub mod throw;

pub use config::{BustRule, CheckoutMode, GameConfig, ResetPolicy, DARTS_PER_TURN, STARTING_SCORE};
pub use error::DartsError;
pub use player::{Player, PlayerId};
pub use segment::{BoardNumber, Multiplier, Segment, BULL_VALUE, MAX_NUMBER};
pub use throw::{format_dart, Throw, MAX_THROW_VALUE};
