use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub db_max_connections: u32,
    /// Public portfolio pages live under this path, one per username.
    pub portfolio_url_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 10)?,
            portfolio_url_prefix: std::env::var("PORTFOLIO_URL_PREFIX")
                .unwrap_or_else(|_| "/ai-portfolio".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_uses_default_when_unset() {
        let port: u16 = env_or("FOLIO_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_env_or_parses_value() {
        std::env::set_var("FOLIO_TEST_MAX_CONNECTIONS", "25");
        let max: u32 = env_or("FOLIO_TEST_MAX_CONNECTIONS", 10).unwrap();
        assert_eq!(max, 25);
    }

    #[test]
    fn test_env_or_rejects_garbage() {
        std::env::set_var("FOLIO_TEST_BAD_PORT", "not-a-port");
        let err = env_or::<u16>("FOLIO_TEST_BAD_PORT", 8080).unwrap_err();
        assert!(err.to_string().contains("FOLIO_TEST_BAD_PORT"));
    }

    #[test]
    fn test_require_env_names_missing_key() {
        let err = require_env("FOLIO_TEST_DEFINITELY_MISSING").unwrap_err();
        assert!(err.to_string().contains("FOLIO_TEST_DEFINITELY_MISSING"));
    }
}
