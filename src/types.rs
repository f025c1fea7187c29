//! Common types used throughout the ranking engine

use serde::{Deserialize, Serialize};

/// Unique identifier for players
pub type PlayerId = String;

/// A registered player and their current ranking score
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub identifier: PlayerId,
    pub score: i64,
}

impl Player {
    pub fn new(identifier: impl Into<PlayerId>, score: i64) -> Self {
        Self {
            identifier: identifier.into(),
            score,
        }
    }
}

/// Which side of the table a player was on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}

/// A single reported game. Never stored; it only drives one rating transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub home_identifier: PlayerId,
    pub away_identifier: PlayerId,
    pub home_score: u32,
    pub away_score: u32,
}

impl Game {
    pub fn new(
        home_identifier: impl Into<PlayerId>,
        away_identifier: impl Into<PlayerId>,
        home_score: u32,
        away_score: u32,
    ) -> Self {
        Self {
            home_identifier: home_identifier.into(),
            away_identifier: away_identifier.into(),
            home_score,
            away_score,
        }
    }

    /// Side with the higher score, if any
    pub fn leading_side(&self) -> Option<Side> {
        match self.home_score.cmp(&self.away_score) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn identifier_of(&self, side: Side) -> &PlayerId {
        match side {
            Side::Home => &self.home_identifier,
            Side::Away => &self.away_identifier,
        }
    }
}

/// Point transfer computed for a validated game, before it is applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingAdjustment {
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
    /// Absolute score difference of the game
    pub margin: i64,
    pub winner_delta: i64,
    pub loser_delta: i64,
}

/// Score change for one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingChange {
    pub player_id: PlayerId,
    pub old_score: i64,
    pub new_score: i64,
    pub delta: i64,
}

/// Outcome of a recorded game, as applied to the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: RatingChange,
    pub loser: RatingChange,
    pub margin: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_serializes_with_identifier_and_score() {
        let player = Player::new("alice", 1200);
        let json = serde_json::to_value(&player).unwrap();
        assert_eq!(json, serde_json::json!({"identifier": "alice", "score": 1200}));
    }

    #[test]
    fn test_leading_side() {
        assert_eq!(Game::new("a", "b", 11, 4).leading_side(), Some(Side::Home));
        assert_eq!(Game::new("a", "b", 9, 11).leading_side(), Some(Side::Away));
        assert_eq!(Game::new("a", "b", 10, 10).leading_side(), None);
    }
}
