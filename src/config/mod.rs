//! Configuration management for the rating engine
//!
//! This module handles configuration loading from environment variables and
//! TOML documents, validation, and default values.

pub mod app;

// Re-export commonly used types
pub use app::{validate_config, EloConfig, DEFAULT_K, DEFAULT_RATING};
