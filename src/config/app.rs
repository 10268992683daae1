//! Rating engine configuration
//!
//! Defines [`EloConfig`] and loads it from environment variables or TOML,
//! falling back to defaults for anything left unset.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// K-factor given to players created without an explicit one
pub const DEFAULT_K: f64 = 32.0;

/// Starting rating for new players
pub const DEFAULT_RATING: f64 = 1500.0;

/// Main rating configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EloConfig {
    /// K-factor assigned to new players
    pub default_k: f64,
    /// Rating assigned to new players
    pub initial_rating: f64,
    /// Reject team scores other than 0, 0.5 and 1
    pub strict_team_scores: bool,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for EloConfig {
    fn default() -> Self {
        Self {
            default_k: DEFAULT_K,
            initial_rating: DEFAULT_RATING,
            strict_team_scores: false,
            log_level: "info".to_string(),
        }
    }
}

impl EloConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(k) = env::var("ELO_DEFAULT_K") {
            config.default_k = k
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_DEFAULT_K value: {}", k))?;
        }
        if let Ok(rating) = env::var("ELO_INITIAL_RATING") {
            config.initial_rating = rating
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_INITIAL_RATING value: {}", rating))?;
        }
        if let Ok(strict) = env::var("ELO_STRICT_TEAM_SCORES") {
            config.strict_team_scores = strict
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_STRICT_TEAM_SCORES value: {}", strict))?;
        }
        if let Ok(log_level) = env::var("ELO_LOG_LEVEL") {
            config.log_level = log_level;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).context("Failed to parse rating config")?;
        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &EloConfig) -> Result<()> {
    match config.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.log_level)),
    }

    if config.default_k <= 0.0 || !config.default_k.is_finite() {
        return Err(anyhow!("Default K-factor must be positive"));
    }
    if !config.initial_rating.is_finite() {
        return Err(anyhow!("Initial rating must be finite"));
    }

    Ok(())
}
