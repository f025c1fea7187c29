//! In-memory player registry
//!
//! Players are kept in a `Vec` so that registration order is available for
//! breaking ties in the ranking.

use crate::error::{RankingError, Result};
use crate::types::{Player, PlayerId, RatingChange};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Registry of the players taking part in the current session
#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a registry from previously stored players
    ///
    /// Entries with an empty identifier and repeated identifiers are dropped;
    /// the first occurrence wins.
    pub fn from_players(players: Vec<Player>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(players.len());

        for player in players {
            if player.identifier.trim().is_empty() {
                warn!("Dropping stored player with empty identifier");
                continue;
            }
            if !seen.insert(player.identifier.clone()) {
                warn!(
                    "Dropping duplicate stored player '{}' (score {})",
                    player.identifier, player.score
                );
                continue;
            }
            kept.push(player);
        }

        Self { players: kept }
    }

    /// Register a new player with a non-negative starting score
    pub fn register(&mut self, identifier: &str, initial_score: i64) -> Result<()> {
        if identifier.trim().is_empty() {
            return Err(RankingError::InvalidIdentifier);
        }
        if self.contains(identifier) {
            return Err(RankingError::DuplicateIdentifier {
                id: identifier.to_string(),
            });
        }
        if initial_score < 0 {
            return Err(RankingError::InvalidScore {
                reason: format!("initial score {} is negative", initial_score),
            });
        }

        self.players.push(Player::new(identifier, initial_score));
        debug!("Registered player '{}' with score {}", identifier, initial_score);
        Ok(())
    }

    /// Remove a player, returning their last record
    pub fn remove(&mut self, identifier: &str) -> Result<Player> {
        let index = self.position(identifier)?;
        Ok(self.players.remove(index))
    }

    /// All players sorted by descending score, ties in registration order
    pub fn ranked_view(&self) -> Vec<Player> {
        let mut ranked = self.players.clone();
        // sort_by is stable
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// 1-based position of a player in the ranked view
    pub fn rank_of(&self, identifier: &str) -> Option<usize> {
        self.ranked_view()
            .iter()
            .position(|p| p.identifier == identifier)
            .map(|index| index + 1)
    }

    pub fn count(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.players.iter().any(|p| p.identifier == identifier)
    }

    pub fn get(&self, identifier: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.identifier == identifier)
    }

    /// Players in registration order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn clear(&mut self) {
        self.players.clear();
    }

    /// Add `delta` to a player's score, returning the new score
    pub fn apply_delta(&mut self, identifier: &str, delta: i64) -> Result<i64> {
        let index = self.position(identifier)?;
        let player = &mut self.players[index];
        player.score = player.score.saturating_add(delta);
        Ok(player.score)
    }

    /// Apply score deltas to two distinct players as one step
    ///
    /// Both players are looked up before anything is written, so on error the
    /// registry is unchanged.
    pub fn apply_pair(
        &mut self,
        first: &PlayerId,
        first_delta: i64,
        second: &PlayerId,
        second_delta: i64,
    ) -> Result<(RatingChange, RatingChange)> {
        if first == second {
            return Err(RankingError::SamePlayer);
        }
        let first_index = self.position(first)?;
        let second_index = self.position(second)?;

        let first_change = self.apply_at(first_index, first_delta);
        let second_change = self.apply_at(second_index, second_delta);
        Ok((first_change, second_change))
    }

    fn apply_at(&mut self, index: usize, delta: i64) -> RatingChange {
        let player = &mut self.players[index];
        let old_score = player.score;
        player.score = old_score.saturating_add(delta);
        RatingChange {
            player_id: player.identifier.clone(),
            old_score,
            new_score: player.score,
            delta,
        }
    }

    fn position(&self, identifier: &str) -> Result<usize> {
        self.players
            .iter()
            .position(|p| p.identifier == identifier)
            .ok_or_else(|| RankingError::NotFound {
                id: identifier.to_string(),
            })
    }
}
