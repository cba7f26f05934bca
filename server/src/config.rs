//! Environment-driven server configuration.
//!
//! DESIGN
//! ======
//! Every knob has a default so the server starts with an empty environment.
//! `ADMIN_SECRET` is read separately by the credential checker.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_SESSION_TTL_SECS: u64 = 12 * 60 * 60;
const DEFAULT_LOGIN_RATE_LIMIT: usize = 5;
const DEFAULT_LOGIN_RATE_WINDOW_SECS: u64 = 60;

/// Parse `key` as `T`, falling back to `default` when unset or invalid.
pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Boolean flag `key`: `1/true/yes/on` or `0/false/no/off`, else `default`.
pub(crate) fn env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key).map(|v| v.trim().to_ascii_lowercase()) {
        Ok(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        Ok(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        _ => default,
    }
}

/// Non-empty value of `key`, if any.
pub(crate) fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Postgres URL. `None` selects the in-memory conference store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub session_ttl: Duration,
    pub login_rate_limit: usize,
    pub login_rate_window: Duration,
    /// Key login throttling on the first `X-Forwarded-For` hop. Only safe
    /// behind a proxy that overwrites the header.
    pub trust_forwarded_for: bool,
}

impl ServerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            port: env_parse("PORT", DEFAULT_PORT),
            database_url: env_non_empty("DATABASE_URL"),
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS),
            session_ttl: Duration::from_secs(env_parse("ADMIN_SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS)),
            login_rate_limit: env_parse("LOGIN_RATE_LIMIT", DEFAULT_LOGIN_RATE_LIMIT),
            login_rate_window: Duration::from_secs(env_parse("LOGIN_RATE_WINDOW_SECS", DEFAULT_LOGIN_RATE_WINDOW_SECS)),
            trust_forwarded_for: env_bool("TRUST_FORWARDED_FOR", false),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
            login_rate_limit: DEFAULT_LOGIN_RATE_LIMIT,
            login_rate_window: Duration::from_secs(DEFAULT_LOGIN_RATE_WINDOW_SECS),
            trust_forwarded_for: false,
        }
    }
}
