//! Service layer for the ranking ladder
//!
//! This module contains the session that ties the registry, the rating engine
//! and the session store together for the presentation layer.

pub mod session;

pub use session::Session;
