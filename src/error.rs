//! Error types for rating updates
//!
//! Every rating operation reports input-validation failures through
//! [`EloError`]. None of them are retryable; they all point at bad caller input.

/// Result type alias for rating operations
pub type Result<T> = std::result::Result<T, EloError>;

/// Validation failures raised before any rating is touched
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum EloError {
    #[error("Invalid score: {score} (expected 0, 0.5 or 1)")]
    InvalidScore { score: f64 },

    #[error("K-factor must be positive, got {k}")]
    NonPositiveK { k: f64 },

    #[error("Rating must be positive for Bradley-Terry strength, got {rating}")]
    NonPositiveRating { rating: f64 },

    #[error("Team must contain at least one player")]
    ZeroLength,
}
