//! Process configuration read from the environment (`.env` is loaded by the binary).

use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_KEY: &str = "RAHASIA";

/// Connection pool sizing for the shared `PgPool`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        PoolConfig {
            max_connections: 20,
            min_connections: 5,
            idle_timeout: Duration::from_secs(10 * 60),
            max_lifetime: Duration::from_secs(60 * 60),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub api_key: String,
    pub pool: PoolConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PoolConfig::default();
        let api_key = lookup("API_KEY").unwrap_or_else(|| DEFAULT_API_KEY.into());
        if api_key.is_empty() {
            return Err(ConfigError::Missing("API_KEY"));
        }
        Ok(AppConfig {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "postgres://localhost/category_api".into()),
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".into()),
            api_key,
            pool: PoolConfig {
                max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
                min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", defaults.min_connections)?,
                idle_timeout: Duration::from_secs(parse_or(
                    &lookup,
                    "DB_IDLE_TIMEOUT_SECS",
                    defaults.idle_timeout.as_secs(),
                )?),
                max_lifetime: Duration::from_secs(parse_or(
                    &lookup,
                    "DB_MAX_LIFETIME_SECS",
                    defaults.max_lifetime.as_secs(),
                )?),
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
