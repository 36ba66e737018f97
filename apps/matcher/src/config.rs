use anyhow::{Context, Result};

use crate::matching::DEFAULT_MIN_SCORE;

/// Application configuration loaded from environment variables.
/// Everything is optional with sensible defaults, so the CLI works out of
/// the box with the built-in catalog.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default minimum match score for `jobscout match` (0–100).
    pub min_score: u32,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            min_score: std::env::var("JOBSCOUT_MIN_SCORE")
                .unwrap_or_else(|_| DEFAULT_MIN_SCORE.to_string())
                .parse::<u32>()
                .context("JOBSCOUT_MIN_SCORE must be an integer in 0–100")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_env_unset() {
        std::env::remove_var("JOBSCOUT_MIN_SCORE");
        let config = Config::from_env().unwrap();
        assert_eq!(config.min_score, DEFAULT_MIN_SCORE);
    }
}
