//! Test fixtures and mock implementations for integration testing

#![allow(dead_code)]

use mockall::mock;
use std::sync::Arc;
use table_tennis_rank::config::RatingConfig;
use table_tennis_rank::error::{RankingError, Result};
use table_tennis_rank::storage::{InMemorySessionStore, SessionStore};
use table_tennis_rank::types::Player;
use table_tennis_rank::Session;

// Session store whose behaviour is scripted per test
mock! {
    pub Store {}

    impl SessionStore for Store {
        fn load(&self) -> Vec<Player>;
        fn save(&self, players: &[Player]) -> Result<()>;
        fn clear(&self) -> Result<()>;
    }
}

/// Players of a typical club night, in registration order
pub fn club_players() -> Vec<(&'static str, i64)> {
    vec![
        ("alice", 1000),
        ("bob", 1000),
        ("carol", 1200),
        ("dave", 800),
    ]
}

/// Session backed by an in-memory store, with the club players registered
pub fn create_club_session() -> (Session, Arc<InMemorySessionStore>) {
    let store = Arc::new(InMemorySessionStore::new());
    let mut session = Session::new(store.clone(), RatingConfig::default());
    for (id, score) in club_players() {
        session.register_player(id, score).unwrap();
    }
    (session, store)
}

/// Mock store that starts empty and fails every save
pub fn failing_store() -> MockStore {
    let mut store = MockStore::new();
    store.expect_load().returning(Vec::new);
    store.expect_save().returning(|_| {
        Err(RankingError::Io {
            message: "disk full".to_string(),
        })
    });
    store.expect_clear().returning(|| Ok(()));
    store
}

/// Current scores keyed by identifier, sorted for comparison
pub fn score_table(session: &Session) -> Vec<(String, i64)> {
    let mut table: Vec<_> = session
        .list_ranked()
        .into_iter()
        .map(|p| (p.identifier, p.score))
        .collect();
    table.sort();
    table
}
