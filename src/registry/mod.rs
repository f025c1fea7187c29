//! Player registry
//!
//! Holds the players of the current session in registration order and keeps
//! their identifiers unique.

pub mod player_registry;

pub use player_registry::PlayerRegistry;
