//! Team-vs-team rating updates using Bradley-Terry aggregation
//!
//! A team's strength is the sum of its members' Bradley-Terry strengths.
//! The team-level Elo delta is then split across members in proportion to
//! each member's share of that strength, so stronger members absorb more
//! of both gains and losses.
//!
//! Ratings must be strictly positive here. Callers working on an absolute
//! scale that can dip to zero or below should shift their teams with
//! [`minimum_rating`](super::primitives::minimum_rating) and
//! [`make_positive`](super::primitives::make_positive) first.

use crate::error::{EloError, Result};
use crate::rating::pairwise::ensure_positive_k;
use crate::rating::primitives::to_bradley_terry_strength;
use crate::types::Player;
use tracing::trace;

/// Total Bradley-Terry strength of a team
pub fn sum_bradley_terry_strength(team: &[Player]) -> Result<f64> {
    if team.is_empty() {
        return Err(EloError::ZeroLength);
    }

    let mut sum = 0.0;
    for player in team {
        if player.rating <= 0.0 || player.rating.is_nan() {
            return Err(EloError::NonPositiveRating {
                rating: player.rating,
            });
        }
        sum += to_bradley_terry_strength(player.rating);
    }

    Ok(sum)
}

/// Update every member of both teams after a match.
///
/// `score_team1` is used as given; unlike the 1v1 update it is not checked
/// against {0, 0.5, 1}. Use
/// [`EloCalculator::rate_teams`](super::calculator::EloCalculator::rate_teams)
/// with `strict_team_scores` for the checked variant.
///
/// Checks run in this order, and no rating changes unless all pass: both
/// teams non-empty, both K-factors positive, team1 strength, team2 strength.
///
/// Strengths are `10^(rating/400)` in `f64`, which overflows for ratings
/// above roughly 123,000. A member past that limit turns every rating on
/// both teams into NaN while the call still returns `Ok(())`.
pub fn update_team_v_team(
    team1: &mut [Player],
    team2: &mut [Player],
    score_team1: f64,
    k_team1: f64,
    k_team2: f64,
) -> Result<()> {
    apply_team_update(team1, team2, score_team1, k_team1, k_team2).map(|_| ())
}

/// Same as [`update_team_v_team`], returning team1's pre-match expected score
pub(crate) fn apply_team_update(
    team1: &mut [Player],
    team2: &mut [Player],
    score_team1: f64,
    k_team1: f64,
    k_team2: f64,
) -> Result<f64> {
    if team1.is_empty() || team2.is_empty() {
        return Err(EloError::ZeroLength);
    }
    ensure_positive_k(k_team1)?;
    ensure_positive_k(k_team2)?;

    let strength_team1 = sum_bradley_terry_strength(team1)?;
    let strength_team2 = sum_bradley_terry_strength(team2)?;

    let expected_team1 = strength_team1 / (strength_team1 + strength_team2);
    let expected_team2 = 1.0 - expected_team1;
    let score_team2 = 1.0 - score_team1;

    let delta_team1 = k_team1 * (score_team1 - expected_team1);
    let delta_team2 = k_team2 * (score_team2 - expected_team2);

    distribute(team1, strength_team1, delta_team1);
    distribute(team2, strength_team2, delta_team2);

    trace!(
        team1_size = team1.len(),
        team2_size = team2.len(),
        expected_team1,
        delta_team1,
        delta_team2,
        "team ratings updated"
    );
    Ok(expected_team1)
}

fn distribute(team: &mut [Player], team_strength: f64, team_delta: f64) {
    for player in team.iter_mut() {
        let share = to_bradley_terry_strength(player.rating) / team_strength;
        player.rating += share * team_delta;
    }
}
