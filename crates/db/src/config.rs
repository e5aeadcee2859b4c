use std::fmt;
use std::str::FromStr;

use notas_core::env::{self, ConfigError};
use sqlx::mysql::MySqlConnectOptions;

/// Database connection settings loaded from environment variables.
///
/// | Env Var                   | Default     |
/// |---------------------------|-------------|
/// | `DB_HOST`                 | `localhost` |
/// | `DB_PORT`                 | `3306`      |
/// | `DB_USER`                 | `root`      |
/// | `DB_PASSWORD`             | `secret`    |
/// | `DB_NAME`                 | `notasdb`   |
/// | `DATABASE_URL`            | unset       |
/// | `DB_MAX_CONNECTIONS`      | `10`        |
/// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`         |
///
/// When `DATABASE_URL` is set it replaces the five `DB_*` connection parts.
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub url: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl DbConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env::process_env)
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: env::string_or(lookup, "DB_HOST", "localhost"),
            port: env::parse_or(lookup, "DB_PORT", 3306)?,
            user: env::string_or(lookup, "DB_USER", "root"),
            password: env::string_or(lookup, "DB_PASSWORD", "secret"),
            database: env::string_or(lookup, "DB_NAME", "notasdb"),
            url: lookup("DATABASE_URL").filter(|u| !u.is_empty()),
            max_connections: env::parse_or(lookup, "DB_MAX_CONNECTIONS", 10)?,
            acquire_timeout_secs: env::parse_or(lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5)?,
        })
    }

    /// Driver connect options for these settings.
    pub fn connect_options(&self) -> Result<MySqlConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return MySqlConnectOptions::from_str(url);
        }
        Ok(MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database))
    }
}

// Credentials stay out of logs.
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .finish()
    }
}
