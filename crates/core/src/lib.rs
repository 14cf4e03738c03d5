//! Domain logic for the acadex platform.
//!
//! This crate contains no database dependencies; all data is passed in by
//! the caller, either directly or through the narrow read-only store
//! traits defined next to each service. Everything here is deterministic
//! and unit-testable with in-memory fakes.

pub mod error;
pub mod fees;
pub mod leaderboard;
pub mod report;
pub mod roles;
pub mod stats;
pub mod types;
