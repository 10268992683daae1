//! Common types used throughout the rating engine

use crate::config::{DEFAULT_K, DEFAULT_RATING};
use crate::error::EloError;
use serde::{Deserialize, Serialize};
use skillratings::elo::EloRating;
use skillratings::Outcomes;

/// A rated participant. Callers own these; updates adjust `rating` in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rating: f64,
    /// K-factor used when an update is not given an explicit one
    pub default_k: f64,
}

impl Player {
    pub fn new(rating: f64, default_k: f64) -> Self {
        Self { rating, default_k }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self {
            rating: DEFAULT_RATING,
            default_k: DEFAULT_K,
        }
    }
}

impl From<&Player> for EloRating {
    fn from(player: &Player) -> Self {
        Self {
            rating: player.rating,
        }
    }
}

/// Result of a match from the first side's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Canonical score: 1 for a win, 0.5 for a draw, 0 for a loss
    pub fn score(self) -> f64 {
        match self {
            Outcome::Win => 1.0,
            Outcome::Draw => 0.5,
            Outcome::Loss => 0.0,
        }
    }

    /// The same result seen from the other side
    pub fn reversed(self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Draw => Outcome::Draw,
            Outcome::Loss => Outcome::Win,
        }
    }
}

impl TryFrom<f64> for Outcome {
    type Error = EloError;

    /// Exact match only; 0.9999 is not a win.
    fn try_from(score: f64) -> Result<Self, Self::Error> {
        if score == 1.0 {
            Ok(Outcome::Win)
        } else if score == 0.5 {
            Ok(Outcome::Draw)
        } else if score == 0.0 {
            Ok(Outcome::Loss)
        } else {
            Err(EloError::InvalidScore { score })
        }
    }
}

impl From<Outcome> for Outcomes {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => Outcomes::WIN,
            Outcome::Draw => Outcomes::DRAW,
            Outcome::Loss => Outcomes::LOSS,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "Win"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Loss => write!(f, "Loss"),
        }
    }
}

/// Rating change for a single player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub old_rating: f64,
    pub new_rating: f64,
}

impl RatingChange {
    pub fn delta(&self) -> f64 {
        self.new_rating - self.old_rating
    }
}

/// Report of one rated match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingUpdate {
    /// Changes for the first side, in input order
    pub side1: Vec<RatingChange>,
    /// Changes for the second side, in input order
    pub side2: Vec<RatingChange>,
    /// Pre-match expected score of the first side
    pub expected_score: f64,
}
