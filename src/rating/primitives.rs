//! Rating primitives shared by the pairwise and team updates

use crate::error::{EloError, Result};
use crate::types::Player;

/// Rating difference that corresponds to 10:1 odds
pub const ELO_SCALE: f64 = 400.0;

/// Probability that a player rated `rating_a` beats one rated `rating_b`
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating_b - rating_a) / ELO_SCALE))
}

/// Convert an Elo rating into a Bradley-Terry strength, `10^(rating/400)`
pub fn to_bradley_terry_strength(rating: f64) -> f64 {
    10f64.powf(rating / ELO_SCALE)
}

/// Smallest rating on the team
pub fn minimum_rating(team: &[Player]) -> Result<f64> {
    let (first, rest) = team.split_first().ok_or(EloError::ZeroLength)?;

    Ok(rest
        .iter()
        .map(|player| player.rating)
        .fold(first.rating, |min, rating| if rating < min { rating } else { min }))
}

/// Shift `rating` so that `minimum_rating` lands on exactly 1
pub fn make_positive(rating: f64, minimum_rating: f64) -> f64 {
    rating - minimum_rating + 1.0
}
