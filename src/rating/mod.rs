//! Rating system for the table tennis ladder
//!
//! This module provides final score validation, the margin-based point
//! transfer rule, and the engine that applies results to the player registry.

pub mod calculator;
pub mod engine;
pub mod validator;

// Re-export commonly used types
pub use calculator::{MarginRatingCalculator, RatingCalculator};
pub use engine::{delta, loser, winner, RatingEngine};
pub use validator::{validate, validate_game};
