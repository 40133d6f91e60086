//! Scoring statistics.

use serde::{Deserialize, Serialize};

use super::history::TurnHistory;
use crate::core::{Player, DARTS_PER_TURN};

/// Points per three darts.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ThreeDartAverage(f64);

impl ThreeDartAverage {
    /// Unrounded value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Value rounded to two decimal places.
    #[must_use]
    pub fn rounded(self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }
}

impl std::fmt::Display for ThreeDartAverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Summary statistics for one player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub darts_thrown: u64,
    pub total_scored: u64,
    /// `None` until the first dart is thrown.
    pub three_dart_average: Option<ThreeDartAverage>,
    /// Best turn total in the current game.
    pub highest_turn: Option<u32>,
    /// Turns started in the current game.
    pub turns_played: usize,
}

/// Derives averages and summaries from a player's record.
pub struct StatsCalculator;

impl StatsCalculator {
    /// `total / darts * 3`, or `None` with no darts thrown.
    ///
    /// ```
    /// use rust_darts::scoring::StatsCalculator;
    ///
    /// let avg = StatsCalculator::average_from(180, 3).unwrap();
    /// assert_eq!(avg.to_string(), "180.00");
    /// assert!(StatsCalculator::average_from(0, 0).is_none());
    /// ```
    #[must_use]
    pub fn average_from(total_scored: u64, darts_thrown: u64) -> Option<ThreeDartAverage> {
        if darts_thrown == 0 {
            return None;
        }
        let per_dart = total_scored as f64 / darts_thrown as f64;
        Some(ThreeDartAverage(per_dart * DARTS_PER_TURN as f64))
    }

    /// Running three-dart average from the player's cumulative aggregates.
    #[must_use]
    pub fn three_dart_average(player: &Player) -> Option<ThreeDartAverage> {
        Self::average_from(player.total_score_accumulated(), player.total_darts_thrown())
    }

    /// Full summary for display.
    #[must_use]
    pub fn player_stats(player: &Player) -> PlayerStats {
        let history = TurnHistory::for_player(player);
        PlayerStats {
            darts_thrown: player.total_darts_thrown(),
            total_scored: player.total_score_accumulated(),
            three_dart_average: Self::three_dart_average(player),
            highest_turn: history.highest_total(),
            turns_played: history.len(),
        }
    }
}
