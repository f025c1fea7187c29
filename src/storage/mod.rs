//! Session store interface and implementations
//!
//! The session store persists the player list of the current run. Loading never
//! fails: missing or unreadable state is treated as an empty session.

pub mod json_file;
pub mod memory;

use crate::error::Result;
use crate::types::Player;

pub use json_file::JsonFileSessionStore;
pub use memory::InMemorySessionStore;

/// Trait for session store operations
pub trait SessionStore: Send + Sync {
    /// Load every stored player; empty when nothing usable is stored
    fn load(&self) -> Vec<Player>;

    /// Replace the stored players with `players`
    fn save(&self, players: &[Player]) -> Result<()>;

    /// Forget all stored state
    fn clear(&self) -> Result<()>;
}
