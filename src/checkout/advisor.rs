//! Checkout suggestions for the darts left in a turn.
//!
//! ## Filtering
//!
//! - Outside 2-170: nothing.
//! - 3 darts left: every stored suggestion.
//! - 2 darts left: suggestions of at most two darts.
//! - 1 dart left: single-dart suggestions on a double or the Bull.
//!
//! An empty result means "no finish"; rendering that state is the caller's
//! job.

use super::generator;
use super::table::{Checkout, CheckoutTable, MAX_CHECKOUT, MIN_CHECKOUT};
use crate::core::{CheckoutMode, Player, DARTS_PER_TURN};

/// Keep the checkouts that can be completed with `darts_left` darts.
#[must_use]
pub fn filter_for_darts_left(checkouts: &[Checkout], darts_left: usize) -> Vec<Checkout> {
    match darts_left {
        0 => Vec::new(),
        1 => checkouts
            .iter()
            .filter(|c| c.len() == 1 && c.darts()[0].is_finishing())
            .cloned()
            .collect(),
        n if n >= DARTS_PER_TURN => checkouts.to_vec(),
        n => checkouts.iter().filter(|c| c.len() <= n).cloned().collect(),
    }
}

/// Suggests finishes from the remaining score and darts left in the turn.
///
/// ## Example
///
/// ```
/// use rust_darts::checkout::CheckoutAdvisor;
/// use rust_darts::core::CheckoutMode;
///
/// let advisor = CheckoutAdvisor::new(CheckoutMode::Curated);
///
/// assert_eq!(advisor.suggest_labels(170, 3), ["T20 T20 Bull"]);
/// assert_eq!(advisor.suggest_labels(40, 1), ["D20"]);
/// assert!(advisor.suggest_labels(171, 3).is_empty());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CheckoutAdvisor<'t> {
    table: &'t CheckoutTable,
    mode: CheckoutMode,
}

impl CheckoutAdvisor<'static> {
    /// Advisor backed by the built-in curated table.
    #[must_use]
    pub fn new(mode: CheckoutMode) -> Self {
        Self::with_table(CheckoutTable::curated(), mode)
    }
}

impl<'t> CheckoutAdvisor<'t> {
    /// Advisor backed by a caller-supplied table.
    #[must_use]
    pub fn with_table(table: &'t CheckoutTable, mode: CheckoutMode) -> Self {
        Self { table, mode }
    }

    #[must_use]
    pub fn mode(&self) -> CheckoutMode {
        self.mode
    }

    /// Finishes for `remaining` with `darts_left` darts. Values of
    /// `darts_left` above three are treated as three.
    #[must_use]
    pub fn suggest(&self, remaining: u32, darts_left: usize) -> Vec<Checkout> {
        if !(MIN_CHECKOUT..=MAX_CHECKOUT).contains(&remaining) {
            return Vec::new();
        }
        let darts_left = darts_left.min(DARTS_PER_TURN);

        match self.mode {
            CheckoutMode::Curated => self.curated(remaining, darts_left),
            CheckoutMode::Exhaustive { limit } => generator::finishes(remaining, darts_left, limit),
            CheckoutMode::CuratedWithFallback { limit } => {
                let curated = self.curated(remaining, darts_left);
                if curated.is_empty() {
                    generator::finishes(remaining, darts_left, limit)
                } else {
                    curated
                }
            }
        }
    }

    /// Finishes for the player's current score and turn position.
    #[must_use]
    pub fn suggest_for(&self, player: &Player) -> Vec<Checkout> {
        self.suggest(player.score(), player.darts_left_in_turn())
    }

    /// Like [`suggest`](Self::suggest), rendered as space-separated tokens.
    #[must_use]
    pub fn suggest_labels(&self, remaining: u32, darts_left: usize) -> Vec<String> {
        self.suggest(remaining, darts_left)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn curated(&self, remaining: u32, darts_left: usize) -> Vec<Checkout> {
        filter_for_darts_left(self.table.lookup(remaining), darts_left)
    }
}

impl Default for CheckoutAdvisor<'static> {
    fn default() -> Self {
        Self::new(CheckoutMode::default())
    }
}
