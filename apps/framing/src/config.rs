use std::str::FromStr;

use anyhow::{Context, Result};

use crate::sizing::availability::SheetLimits;

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup fails only on values that do not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub sheet_limits: SheetLimits,
    pub fallback_frame_price: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SheetLimits::default();

        let config = Config {
            port: env_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            sheet_limits: SheetLimits {
                max_width: env_or(&lookup, "MAX_MAT_WIDTH", defaults.max_width)?,
                max_height: env_or(&lookup, "MAX_MAT_HEIGHT", defaults.max_height)?,
            },
            fallback_frame_price: env_or(&lookup, "FALLBACK_FRAME_PRICE", 120.0)?,
        };

        if !(config.sheet_limits.max_width > 0.0 && config.sheet_limits.max_height > 0.0) {
            anyhow::bail!("MAX_MAT_WIDTH and MAX_MAT_HEIGHT must be positive");
        }
        if !(config.fallback_frame_price >= 0.0) {
            anyhow::bail!("FALLBACK_FRAME_PRICE must not be negative");
        }
        Ok(config)
    }
}

fn env_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}
