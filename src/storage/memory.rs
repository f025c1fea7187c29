//! In-memory session store

use crate::error::{RankingError, Result};
use crate::storage::SessionStore;
use crate::types::Player;
use std::sync::RwLock;
use tracing::warn;

/// Session store that keeps players in process memory
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    players: RwLock<Vec<Player>>,
    save_count: RwLock<usize>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `players`
    pub fn with_players(players: Vec<Player>) -> Self {
        Self {
            players: RwLock::new(players),
            save_count: RwLock::new(0),
        }
    }

    /// Number of successful saves (for testing)
    pub fn save_count(&self) -> usize {
        self.save_count.read().map(|count| *count).unwrap_or_default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Vec<Player> {
        match self.players.read() {
            Ok(players) => players.clone(),
            Err(_) => {
                warn!("Session store lock poisoned, starting with no players");
                Vec::new()
            }
        }
    }

    fn save(&self, players: &[Player]) -> Result<()> {
        let mut stored = self.players.write().map_err(|_| RankingError::Io {
            message: "Failed to acquire session store write lock".to_string(),
        })?;
        *stored = players.to_vec();
        drop(stored);

        if let Ok(mut count) = self.save_count.write() {
            *count += 1;
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut stored = self.players.write().map_err(|_| RankingError::Io {
            message: "Failed to acquire session store write lock".to_string(),
        })?;
        stored.clear();
        Ok(())
    }
}
