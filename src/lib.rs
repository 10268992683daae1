//! Team Elo - rating updates for players and teams
//!
//! This crate computes Elo expected scores and applies rating updates after
//! 1v1 matches and team-vs-team matches, where a team's delta is shared among
//! its members by Bradley-Terry strength.

pub mod config;
pub mod error;
pub mod rating;
pub mod telemetry;
pub mod types;

// Re-export commonly used types and functions
pub use config::EloConfig;
pub use error::{EloError, Result};
pub use rating::{
    expected_score, make_positive, minimum_rating, sum_bradley_terry_strength,
    to_bradley_terry_strength, update_1v1, update_1v1_custom_k, update_team_v_team,
    EloCalculator,
};
pub use types::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
