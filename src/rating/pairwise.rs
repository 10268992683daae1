//! One-on-one rating updates

use crate::error::{EloError, Result};
use crate::rating::primitives::expected_score;
use crate::types::{Outcome, Player};
use tracing::trace;

/// Update both players after a 1v1 match using explicit K-factors.
///
/// `score_player1` must be exactly 0, 0.5 or 1. The score is checked before
/// the K-factors, and neither player is touched unless every check passes.
pub fn update_1v1_custom_k(
    player1: &mut Player,
    player2: &mut Player,
    score_player1: f64,
    k_player1: f64,
    k_player2: f64,
) -> Result<()> {
    Outcome::try_from(score_player1)?;
    ensure_positive_k(k_player1)?;
    ensure_positive_k(k_player2)?;

    let expected_player1 = expected_score(player1.rating, player2.rating);
    let expected_player2 = 1.0 - expected_player1;
    let score_player2 = 1.0 - score_player1;

    let (old1, old2) = (player1.rating, player2.rating);
    player1.rating += k_player1 * (score_player1 - expected_player1);
    player2.rating += k_player2 * (score_player2 - expected_player2);

    trace!(
        old1,
        new1 = player1.rating,
        old2,
        new2 = player2.rating,
        score_player1,
        "1v1 ratings updated"
    );
    Ok(())
}

/// Update both players after a 1v1 match using each player's default K
pub fn update_1v1(player1: &mut Player, player2: &mut Player, score_player1: f64) -> Result<()> {
    let (k_player1, k_player2) = (player1.default_k, player2.default_k);
    update_1v1_custom_k(player1, player2, score_player1, k_player1, k_player2)
}

/// NaN is rejected along with zero and negatives
pub(crate) fn ensure_positive_k(k: f64) -> Result<()> {
    if k > 0.0 {
        Ok(())
    } else {
        Err(EloError::NonPositiveK { k })
    }
}
