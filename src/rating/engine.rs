//! Rating engine
//!
//! Determines the winner and loser of a game and applies the point transfer
//! computed by a [`RatingCalculator`] to a [`PlayerRegistry`].

use crate::config::RatingConfig;
use crate::error::{RankingError, Result};
use crate::rating::calculator::{MarginRatingCalculator, RatingCalculator};
use crate::rating::validator::validate_game;
use crate::registry::PlayerRegistry;
use crate::types::{Game, GameOutcome, PlayerId, Side};
use crate::utils::score_margin;
use tracing::{debug, info};

/// Identifier of the winning player, or `None` for unfinished or tied games
pub fn winner(game: &Game) -> Option<&PlayerId> {
    decided_side(game).map(|side| game.identifier_of(side))
}

/// Identifier of the losing player, or `None` for unfinished or tied games
pub fn loser(game: &Game) -> Option<&PlayerId> {
    decided_side(game).map(|side| match side {
        Side::Home => &game.away_identifier,
        Side::Away => &game.home_identifier,
    })
}

/// Absolute score difference of a game
pub fn delta(game: &Game) -> i64 {
    score_margin(game.home_score, game.away_score)
}

fn decided_side(game: &Game) -> Option<Side> {
    if !validate_game(game) {
        debug!(
            "Not a valid final score: {}-{}",
            game.home_score, game.away_score
        );
        return None;
    }
    game.leading_side()
}

/// Applies finished games to a registry
pub struct RatingEngine {
    calculator: Box<dyn RatingCalculator>,
}

impl RatingEngine {
    pub fn new(calculator: Box<dyn RatingCalculator>) -> Self {
        Self { calculator }
    }

    /// Engine using the margin rule with the given point constants
    pub fn with_config(config: RatingConfig) -> Self {
        Self::new(Box::new(MarginRatingCalculator::new(config)))
    }

    pub fn calculator(&self) -> &dyn RatingCalculator {
        self.calculator.as_ref()
    }

    /// Validate `game` and transfer points between its two players
    ///
    /// Checks run in this order: same or unset player, unfinished score,
    /// unregistered player. Either both scores change or neither does.
    pub fn apply_result(&self, registry: &mut PlayerRegistry, game: &Game) -> Result<GameOutcome> {
        if game.home_identifier.is_empty()
            || game.away_identifier.is_empty()
            || game.home_identifier == game.away_identifier
        {
            return Err(RankingError::SamePlayer);
        }

        let adjustment = self.calculator.calculate_adjustment(game)?;

        let (winner, loser) = registry.apply_pair(
            &adjustment.winner_id,
            adjustment.winner_delta,
            &adjustment.loser_id,
            adjustment.loser_delta,
        )?;

        info!(
            "Game {} {}-{} {}: {} {:+}, {} {:+}",
            game.home_identifier,
            game.home_score,
            game.away_score,
            game.away_identifier,
            winner.player_id,
            winner.delta,
            loser.player_id,
            loser.delta
        );

        Ok(GameOutcome {
            winner,
            loser,
            margin: adjustment.margin,
        })
    }
}

impl Default for RatingEngine {
    fn default() -> Self {
        Self::with_config(RatingConfig::default())
    }
}

impl std::fmt::Debug for RatingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RatingEngine")
            .field("calculator", &self.calculator.config())
            .finish()
    }
}
