//! Integration test utilities for the pet feed API
//!
//! Spins up the full router over the in-memory repositories, a temporary
//! upload directory and a fake Google provider, so no external services are
//! needed.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
