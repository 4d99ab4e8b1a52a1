// ABOUTME: Configuration loading and validation for the pessoas server.
// ABOUTME: Reads PESSOAS_* environment variables and falls back to local defaults.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Database file used when PESSOAS_DB is not set.
pub const DEFAULT_DB_PATH: &str = "banco_de_dados.db";
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PESSOAS_BIND is not a valid socket address: {0}")]
    InvalidBind(String),

    #[error("{name} must be one of true/false/1/0/yes/no, got {value:?}")]
    InvalidFlag { name: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct PessoasConfig {
    pub db_path: PathBuf,
    pub bind: SocketAddr,
    pub seed: bool,
}

impl PessoasConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - PESSOAS_DB: SQLite database file (default: banco_de_dados.db)
    /// - PESSOAS_BIND: socket address to bind (default: 127.0.0.1:8501)
    /// - PESSOAS_SEED: seed an empty table on startup (default: true)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let db_path = get("PESSOAS_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        let bind_str = get("PESSOAS_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind: SocketAddr = bind_str
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_str))?;

        let seed = match get("PESSOAS_SEED") {
            None => true,
            Some(value) => parse_flag("PESSOAS_SEED", value)?,
        };

        Ok(Self {
            db_path,
            bind,
            seed,
        })
    }
}

fn parse_flag(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { name, value }),
    }
}
