//! Ranking session
//!
//! A [`Session`] owns the player registry and rating engine for one run and
//! writes the registry to its [`SessionStore`] after every change. It is the
//! surface the presentation layer talks to.

use crate::config::{AppConfig, RatingConfig};
use crate::error::{RankingError, Result};
use crate::rating::RatingEngine;
use crate::registry::PlayerRegistry;
use crate::storage::{JsonFileSessionStore, SessionStore};
use crate::types::{Game, GameOutcome, Player, Side};
use std::sync::Arc;
use tracing::{error, info, warn};

/// State of the current ranking session
pub struct Session {
    registry: PlayerRegistry,
    engine: RatingEngine,
    store: Arc<dyn SessionStore>,
}

impl Session {
    /// Start a session from whatever `store` holds
    pub fn new(store: Arc<dyn SessionStore>, rating: RatingConfig) -> Self {
        Self::with_engine(store, RatingEngine::with_config(rating))
    }

    /// Start a session with a custom rating engine
    pub fn with_engine(store: Arc<dyn SessionStore>, engine: RatingEngine) -> Self {
        let registry = PlayerRegistry::from_players(store.load());
        info!("Session started with {} players", registry.count());

        Self {
            registry,
            engine,
            store,
        }
    }

    /// Open the JSON file session described by `config`
    ///
    /// When `storage.reset_on_start` is set the stored session is wiped first.
    pub fn open(config: &AppConfig) -> Result<Self> {
        let store = Arc::new(JsonFileSessionStore::new(config.storage.path.clone()));
        if config.storage.reset_on_start {
            info!(
                "Resetting stored session at {}",
                config.storage.path.display()
            );
            store.clear()?;
        }
        Ok(Self::new(store, config.rating.clone()))
    }

    /// Register a player and persist the session
    pub fn register_player(&mut self, id: &str, score: i64) -> Result<()> {
        if let Err(e) = self.registry.register(id, score) {
            warn!("Registration of '{}' rejected: {}", id, e);
            return Err(e);
        }
        info!("Player '{}' joined with score {}", id, score);
        self.persist()
    }

    /// Remove a player and persist the session
    pub fn remove_player(&mut self, id: &str) -> Result<()> {
        let removed = self.registry.remove(id)?;
        info!(
            "Player '{}' removed (final score {})",
            removed.identifier, removed.score
        );
        self.persist()
    }

    /// Players ordered by descending score
    pub fn list_ranked(&self) -> Vec<Player> {
        self.registry.ranked_view()
    }

    /// Record a finished game between two registered players
    ///
    /// Scores come straight from user input, so negative values are rejected
    /// with [`RankingError::InvalidScore`] before the game is looked at.
    pub fn record_game(
        &mut self,
        home_id: &str,
        away_id: &str,
        home_score: i64,
        away_score: i64,
    ) -> Result<GameOutcome> {
        let home_score = game_score(Side::Home, home_score)?;
        let away_score = game_score(Side::Away, away_score)?;
        let game = Game::new(home_id, away_id, home_score, away_score);

        let outcome = match self.engine.apply_result(&mut self.registry, &game) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(
                    "Game {} {}-{} {} rejected: {}",
                    home_id, home_score, away_score, away_id, e
                );
                return Err(e);
            }
        };

        self.persist()?;
        Ok(outcome)
    }

    /// Clear the stored session and drop every player
    ///
    /// The registry is only emptied once the store has been cleared.
    pub fn reset_session(&mut self) -> Result<()> {
        self.store.clear().map_err(|e| {
            error!("Failed to clear session store: {}", e);
            e
        })?;
        let dropped = self.registry.count();
        self.registry.clear();
        info!("Session reset, {} players dropped", dropped);
        Ok(())
    }

    /// Write the current registry to the store
    ///
    /// Called after every mutation; callers may call it again to retry a
    /// failed save.
    pub fn persist(&self) -> Result<()> {
        self.store.save(self.registry.players()).map_err(|e| {
            error!("Failed to save session: {}", e);
            e
        })
    }

    pub fn player_count(&self) -> usize {
        self.registry.count()
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.registry.get(id)
    }

    pub fn rank_of(&self, id: &str) -> Option<usize> {
        self.registry.rank_of(id)
    }

    pub fn engine(&self) -> &RatingEngine {
        &self.engine
    }
}

fn game_score(side: Side, score: i64) -> Result<u32> {
    u32::try_from(score).map_err(|_| RankingError::InvalidScore {
        reason: format!("{} score {} is not a valid game score", side, score),
    })
}
