//! Rating system configuration

use serde::{Deserialize, Serialize};

/// Point-transfer constants for the margin rating rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Base points awarded to the winner
    pub win_points: i64,
    /// Base points taken from the loser
    pub loss_points: i64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            win_points: 40,
            loss_points: 10,
        }
    }
}
