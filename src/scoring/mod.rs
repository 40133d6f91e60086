//! Scoring rules and derived views.
//!
//! - `engine`: applies, reverses and resets throws; enforces the bust rule
//! - `history`: groups the throw log into three-dart turns
//! - `stats`: running three-dart average and per-player summaries
//!
//! Only `engine` mutates; `history` and `stats` are pure derivations that
//! are safe to recompute after every command.

pub mod engine;
pub mod history;
pub mod stats;

pub use engine::{Bust, BustReason, ScoringEngine};
pub use history::{Turn, TurnHistory};
pub use stats::{PlayerStats, StatsCalculator, ThreeDartAverage};
