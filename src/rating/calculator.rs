//! Config-driven front end over the rating functions
//!
//! [`EloCalculator`] holds an [`EloConfig`], hands out new players and rates
//! matches, reporting old and new ratings for every participant.

use crate::config::{validate_config, EloConfig};
use crate::error::Result;
use crate::rating::pairwise::update_1v1;
use crate::rating::primitives::expected_score;
use crate::rating::team::apply_team_update;
use crate::types::{Outcome, Player, RatingChange, RatingUpdate};
use tracing::debug;

/// Rating calculator for 1v1 and team matches
#[derive(Debug, Clone, Default)]
pub struct EloCalculator {
    config: EloConfig,
}

impl EloCalculator {
    /// Create a new calculator, rejecting invalid configuration
    pub fn new(config: EloConfig) -> anyhow::Result<Self> {
        validate_config(&config)?;

        Ok(Self { config })
    }

    /// Player at the configured initial rating and default K
    pub fn new_player(&self) -> Player {
        Player::new(self.config.initial_rating, self.config.default_k)
    }

    /// Rate a 1v1 match using each player's default K
    pub fn rate_1v1(
        &self,
        player1: &mut Player,
        player2: &mut Player,
        outcome: Outcome,
    ) -> Result<RatingUpdate> {
        let old1 = player1.rating;
        let old2 = player2.rating;
        let expected = expected_score(old1, old2);

        update_1v1(player1, player2, outcome.score())?;

        debug!(%outcome, expected, "rated 1v1 match");
        Ok(RatingUpdate {
            side1: vec![RatingChange {
                old_rating: old1,
                new_rating: player1.rating,
            }],
            side2: vec![RatingChange {
                old_rating: old2,
                new_rating: player2.rating,
            }],
            expected_score: expected,
        })
    }

    /// Rate a team match.
    ///
    /// With `strict_team_scores` set, `score_team1` must be exactly 0, 0.5
    /// or 1; otherwise any value is passed through to the update.
    pub fn rate_teams(
        &self,
        team1: &mut [Player],
        team2: &mut [Player],
        score_team1: f64,
        k_team1: f64,
        k_team2: f64,
    ) -> Result<RatingUpdate> {
        if self.config.strict_team_scores {
            Outcome::try_from(score_team1)?;
        }

        let old1: Vec<f64> = team1.iter().map(|p| p.rating).collect();
        let old2: Vec<f64> = team2.iter().map(|p| p.rating).collect();

        let expected = apply_team_update(team1, team2, score_team1, k_team1, k_team2)?;

        debug!(
            team1_size = team1.len(),
            team2_size = team2.len(),
            score_team1,
            expected,
            "rated team match"
        );
        Ok(RatingUpdate {
            side1: changes(&old1, team1),
            side2: changes(&old2, team2),
            expected_score: expected,
        })
    }

    /// Get current configuration as JSON
    pub fn config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }

    /// Update configuration from JSON
    pub fn update_config(&mut self, config: serde_json::Value) -> anyhow::Result<()> {
        let new_config: EloConfig = serde_json::from_value(config)
            .map_err(|e| anyhow::anyhow!("Invalid rating configuration: {}", e))?;

        validate_config(&new_config)?;
        debug!(?new_config, "rating configuration updated");
        self.config = new_config;
        Ok(())
    }
}

fn changes(old: &[f64], team: &[Player]) -> Vec<RatingChange> {
    old.iter()
        .zip(team)
        .map(|(&old_rating, player)| RatingChange {
            old_rating,
            new_rating: player.rating,
        })
        .collect()
}
