//! Rating calculator trait and implementations
//!
//! This module defines the interface for turning a finished game into a point
//! transfer, and the margin-based rule used by the ladder.

use crate::config::RatingConfig;
use crate::error::{RankingError, Result};
use crate::rating::validator::validate_game;
use crate::types::{Game, RatingAdjustment, Side};
use crate::utils::score_margin;

/// Trait for calculating the point transfer of a finished game
pub trait RatingCalculator: Send + Sync {
    /// Calculate the winner's and loser's score deltas for `game`
    ///
    /// Fails with [`RankingError::InvalidFinalScore`] when the game is not finished.
    fn calculate_adjustment(&self, game: &Game) -> Result<RatingAdjustment>;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;
}

/// Fixed-base rule with a bonus for the winning margin
///
/// The winner gains `win_points + (margin - 1)` and the loser drops
/// `loss_points + (margin - 1)`.
#[derive(Debug, Clone, Default)]
pub struct MarginRatingCalculator {
    config: RatingConfig,
}

impl MarginRatingCalculator {
    pub fn new(config: RatingConfig) -> Self {
        Self { config }
    }

    /// Extra points moved for margins above one
    pub fn margin_bonus(margin: i64) -> i64 {
        (margin - 1).max(0)
    }
}

impl RatingCalculator for MarginRatingCalculator {
    fn calculate_adjustment(&self, game: &Game) -> Result<RatingAdjustment> {
        let invalid = || RankingError::InvalidFinalScore {
            home_score: game.home_score,
            away_score: game.away_score,
        };

        if !validate_game(game) {
            return Err(invalid());
        }
        let winning_side = game.leading_side().ok_or_else(invalid)?;
        let losing_side = match winning_side {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        };

        let margin = score_margin(game.home_score, game.away_score);
        let bonus = Self::margin_bonus(margin);

        Ok(RatingAdjustment {
            winner_id: game.identifier_of(winning_side).clone(),
            loser_id: game.identifier_of(losing_side).clone(),
            margin,
            winner_delta: self.config.win_points.saturating_add(bonus),
            loser_delta: self.config.loss_points.saturating_add(bonus).saturating_neg(),
        })
    }

    fn config(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "margin",
            "win_points": self.config.win_points,
            "loss_points": self.config.loss_points
        })
    }
}
