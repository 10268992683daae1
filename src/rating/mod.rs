//! Elo rating updates for 1v1 and team-vs-team matches
//!
//! This module provides the rating primitives, the pairwise and team update
//! functions, and a config-driven calculator on top of them.

pub mod calculator;
pub mod pairwise;
pub mod primitives;
pub mod team;

// Re-export commonly used functions
pub use calculator::EloCalculator;
pub use pairwise::{update_1v1, update_1v1_custom_k};
pub use primitives::{expected_score, make_positive, minimum_rating, to_bradley_terry_strength};
pub use team::{sum_bradley_terry_strength, update_team_v_team};
