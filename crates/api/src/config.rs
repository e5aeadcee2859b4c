use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use notas_core::env::{self, ConfigError};
use notas_db::DbConfig;

use crate::logging::LogFormat;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults matching the container deployment; override via
/// environment variables (or a `.env` file) as needed.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Largest accepted request body in bytes (default: `65536`).
    pub max_body_bytes: usize,
    /// Log output format (default: `json`).
    pub log_format: LogFormat,
    /// Database connection settings.
    pub database: DbConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `5000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    /// | `MAX_BODY_BYTES`       | `65536`   |
    /// | `LOG_FORMAT`           | `json`    |
    ///
    /// Database variables are documented on [`DbConfig`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env::process_env)
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: env::parse_or(lookup, "HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?,
            port: env::parse_or(lookup, "PORT", 5000)?,
            request_timeout_secs: env::parse_or(lookup, "REQUEST_TIMEOUT_SECS", 30)?,
            max_body_bytes: env::parse_or(lookup, "MAX_BODY_BYTES", 64 * 1024)?,
            log_format: env::parse_or(lookup, "LOG_FORMAT", LogFormat::Json)?,
            database: DbConfig::from_lookup(lookup)?,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
