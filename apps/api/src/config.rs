use anyhow::{bail, Context, Result};

use crate::recommendation::ranker::RankerConfig;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub profile_api_url: String,
    pub profile_api_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
    pub ranker: RankerConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = RankerConfig::default();
        let ranker = RankerConfig {
            threshold: optional_env("MATCH_THRESHOLD", defaults.threshold)?,
            limit: optional_env("RECOMMENDATION_LIMIT", defaults.limit)?,
        };
        validate_ranker(&ranker)?;

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            profile_api_url: require_env("PROFILE_API_URL")?
                .trim_end_matches('/')
                .to_string(),
            profile_api_timeout_secs: optional_env("PROFILE_API_TIMEOUT_SECS", 30)?,
            port: optional_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            ranker,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn validate_ranker(ranker: &RankerConfig) -> Result<()> {
    if ranker.limit == 0 {
        bail!("RECOMMENDATION_LIMIT must be at least 1");
    }
    if !(0.0..1.0).contains(&ranker.threshold) {
        bail!(
            "MATCH_THRESHOLD must be in [0, 1), got {}",
            ranker.threshold
        );
    }
    Ok(())
}
