//! Load [`AppConfig`] from environment variables.
//!
//! | Variable                  | Default        |
//! |---------------------------|----------------|
//! | `DATABASE_URL`            | required       |
//! | `SERVER_ADDRESS`          | `0.0.0.0:8080` |
//! | `DB_MAX_CONNECTIONS`      | `5`            |
//! | `DB_ACQUIRE_TIMEOUT_SECS` | `5`            |
//! | `SHUTDOWN_GRACE_SECS`     | `10`           |
//! | `MAX_BODY_BYTES`          | `1048576`      |

use crate::config::types::*;
use crate::config::validate;
use crate::error::ConfigError;
use std::fmt::Display;
use std::str::FromStr;

/// Reads the process environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Builds and validates a config from any key lookup. Blank values count as unset.
pub fn from_lookup<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
    let config = AppConfig {
        database_url,
        server_address: get("SERVER_ADDRESS").unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
        db_max_connections: parse_or(get("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
        db_acquire_timeout_secs: parse_or(
            get("DB_ACQUIRE_TIMEOUT_SECS"),
            "DB_ACQUIRE_TIMEOUT_SECS",
            DEFAULT_DB_ACQUIRE_TIMEOUT_SECS,
        )?,
        shutdown_grace_secs: parse_or(get("SHUTDOWN_GRACE_SECS"), "SHUTDOWN_GRACE_SECS", DEFAULT_SHUTDOWN_GRACE_SECS)?,
        max_body_bytes: parse_or(get("MAX_BODY_BYTES"), "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
    };
    validate(&config)?;
    Ok(config)
}

fn parse_or<T>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match raw {
        None => Ok(default),
        Some(s) => s.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: format!("'{}': {}", s, e),
        }),
    }
}
