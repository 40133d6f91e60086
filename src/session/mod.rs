//! Session state and the command/query interface.
//!
//! - `roster`: `GameSession`, the players and the active selection
//! - `controller`: applies `Command`s and answers queries
//! - `event`: `SessionEvent` notifications and the `SessionObserver` trait
//! - `snapshot`: serializable views for rendering
//!
//! ## Example
//!
//! ```
//! use rust_darts::core::{GameConfig, Multiplier, PlayerId, Segment};
//! use rust_darts::session::{Command, Controller};
//!
//! let mut controller = Controller::new(GameConfig::new().with_max_players(2)).unwrap();
//! let second = controller.add_player().unwrap();
//!
//! controller.execute(Command::Throw(Segment::number(20).unwrap(), Multiplier::Triple));
//! controller.execute(Command::SwitchPlayer(second));
//! assert_eq!(controller.score(), 501);
//!
//! controller.execute(Command::SwitchPlayer(PlayerId::new(1)));
//! assert_eq!(controller.score(), 441);
//! ```

pub mod controller;
pub mod event;
pub mod roster;
pub mod snapshot;

pub use controller::{Command, Controller};
pub use event::{SessionEvent, SessionObserver};
pub use roster::GameSession;
pub use snapshot::{PlayerSummary, SessionSnapshot};
