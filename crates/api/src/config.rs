//! Application configuration loaded from environment variables.

use gateway::DatabaseConfig;
use gateway::config::DEFAULT_DB_PORT;
use thiserror::Error;

/// Address the server binds to: every interface.
pub const BIND_HOST: &str = "0.0.0.0";

/// Listen port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value {value:?} for environment variable {name}")]
    InvalidVar { name: &'static str, value: String },
}

/// Server configuration, read once at startup.
///
/// Reads from environment variables:
/// - `DB_HOST`, `DB_NAME`, `DB_USER`, `DB_PASSWORD` — required
/// - `DB_PORT` — database port (default: `5432`)
/// - `PORT` — listen port (default: `8080`)
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database: DatabaseConfig,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which returns a variable's
    /// value or `None` when it is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::MissingVar(name));
        let port_or = |name: &'static str, default: u16| match lookup(name) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVar { name, value }),
            None => Ok(default),
        };

        let database = DatabaseConfig::new(
            required("DB_HOST")?,
            required("DB_NAME")?,
            required("DB_USER")?,
            required("DB_PASSWORD")?,
        )
        .with_port(port_or("DB_PORT", DEFAULT_DB_PORT)?);

        Ok(Self {
            port: port_or("PORT", DEFAULT_PORT)?,
            database,
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", BIND_HOST, self.port)
    }
}
