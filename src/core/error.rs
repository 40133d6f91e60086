//! Validation errors for values entering the engine.

use std::fmt;

/// Errors raised when constructing engine values from raw input.
///
/// Gameplay outcomes (busts, empty undo, roster no-ops) are not errors;
/// see [`crate::scoring::Bust`] and the `Option`/`bool` returns on the
/// roster operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DartsError {
    /// Board numbers run 1-20.
    InvalidSegment(u8),
    /// Multipliers are 1, 2 or 3.
    InvalidMultiplier(u8),
    /// A checkout token such as `T20`, `D16`, `7` or `Bull` failed to parse.
    InvalidToken(String),
    /// A checkout sequence is empty, longer than three darts, does not add up
    /// to its score, or does not end on a double or Bull.
    InvalidCheckout { score: u32, sequence: String },
    /// A game must start above zero.
    InvalidStartingScore(u32),
}

impl fmt::Display for DartsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSegment(n) => write!(f, "invalid board number: {n} (expected 1-20)"),
            Self::InvalidMultiplier(m) => write!(f, "invalid multiplier: {m} (expected 1, 2 or 3)"),
            Self::InvalidToken(token) => write!(f, "invalid dart token: {token:?}"),
            Self::InvalidCheckout { score, sequence } => {
                write!(f, "{sequence:?} is not a valid checkout for {score}")
            }
            Self::InvalidStartingScore(score) => write!(f, "invalid starting score: {score}"),
        }
    }
}

impl std::error::Error for DartsError {}
