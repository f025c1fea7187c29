//! Table Tennis Rank - local ranking ladder for table tennis sessions
//!
//! This crate provides final score validation, a margin-based point transfer
//! between winner and loser, a player registry, and session persistence for an
//! informal table tennis ranking.

pub mod config;
pub mod error;
pub mod rating;
pub mod registry;
pub mod report;
pub mod service;
pub mod storage;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RankingError, Result};
pub use types::*;

// Re-export key components
pub use rating::{RatingCalculator, RatingEngine};
pub use registry::PlayerRegistry;
pub use service::Session;
pub use storage::{InMemorySessionStore, JsonFileSessionStore, SessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
