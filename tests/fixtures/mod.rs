//! Test fixtures shared by the integration tests

#![allow(dead_code)]

use team_elo::types::Player;

pub const EPSILON: f64 = 1e-9;

/// Build a team with the given ratings and a K-factor of 32
pub fn team(ratings: &[f64]) -> Vec<Player> {
    ratings.iter().map(|&rating| Player::new(rating, 32.0)).collect()
}

/// Current ratings of a team, in order
pub fn ratings(team: &[Player]) -> Vec<f64> {
    team.iter().map(|player| player.rating).collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}
