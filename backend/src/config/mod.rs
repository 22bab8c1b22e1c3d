//! Configuration module for the AI Jurisdiction backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::storage::StorageBackend;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Invalid configuration value.
#[derive(Debug)]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid value {:?} for {}", self.value, self.var)
    }
}

impl std::error::Error for ConfigError {}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Plain text or JSON log lines
    pub log_format: LogFormat,
    /// Where the signed-in session is persisted
    pub session_storage: StorageBackend,
    /// Start the case workspace with the demo matters
    pub seed_cases: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let bind_addr_raw =
            env::var("AIJ_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let bind_addr = bind_addr_raw.parse().map_err(|_| ConfigError {
            var: "AIJ_BIND_ADDR",
            value: bind_addr_raw.clone(),
        })?;

        let log_level = env::var("AIJ_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match env::var("AIJ_LOG_FORMAT").as_deref() {
            Err(_) | Ok("text") => LogFormat::Text,
            Ok("json") => LogFormat::Json,
            Ok(other) => {
                return Err(ConfigError {
                    var: "AIJ_LOG_FORMAT",
                    value: other.to_string(),
                })
            }
        };

        let storage_path: PathBuf = env::var("AIJ_SESSION_STORAGE_PATH")
            .unwrap_or_else(|_| "./data/session.json".to_string())
            .into();

        let session_storage = match env::var("AIJ_SESSION_STORAGE").as_deref() {
            Err(_) | Ok("file") => StorageBackend::File(storage_path),
            Ok("memory") => StorageBackend::Memory,
            Ok("disabled") => StorageBackend::Disabled,
            Ok(other) => {
                return Err(ConfigError {
                    var: "AIJ_SESSION_STORAGE",
                    value: other.to_string(),
                })
            }
        };

        let seed_cases = match env::var("AIJ_SEED_CASES").as_deref() {
            Err(_) | Ok("true") | Ok("1") => true,
            Ok("false") | Ok("0") => false,
            Ok(other) => {
                return Err(ConfigError {
                    var: "AIJ_SEED_CASES",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            bind_addr,
            log_level,
            log_format,
            session_storage,
            seed_cases,
        })
    }
}
