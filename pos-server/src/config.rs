//! Server configuration

use std::str::FromStr;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Database host (env: DB_HOST), may carry `:port`
    pub db_host: String,
    /// Database user (env: DB_USER)
    pub db_user: String,
    /// Database password (env: DB_PWD)
    pub db_password: String,
    /// Database schema name (env: DB_BASE)
    pub db_name: String,
    /// Full connection URL (env: DATABASE_URL), overrides the four values above
    pub database_url: Option<String>,
    /// Pool size (env: DB_MAX_CONNECTIONS)
    pub db_max_connections: u32,
    /// Seconds to wait for a pooled connection (env: DB_ACQUIRE_TIMEOUT_SECS)
    pub db_acquire_timeout_secs: u64,
    /// HTTP port (env: HTTP_PORT)
    pub http_port: u16,
    /// Default tracing filter when RUST_LOG is unset (env: LOG_LEVEL)
    pub log_level: String,
    /// Directory for the daily rolling log file (env: LOG_DIR)
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BoxError> {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        Ok(Self {
            db_host: var("DB_HOST", "localhost"),
            db_user: var("DB_USER", "root"),
            db_password: var("DB_PWD", ""),
            db_name: var("DB_BASE", "restaurant"),
            database_url: lookup("DATABASE_URL").filter(|s| !s.is_empty()),
            db_max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            db_acquire_timeout_secs: parse_var(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5)?,
            http_port: parse_var(&lookup, "HTTP_PORT", 8081)?,
            log_level: var("LOG_LEVEL", "pos_server=info,tower_http=info"),
            log_dir: lookup("LOG_DIR").filter(|s| !s.is_empty()),
        })
    }

    /// Connection URL for the pool
    ///
    /// Credentials are plain strings, so user, password and schema name are
    /// percent-encoded before they go into the URL.
    pub fn database_url(&self) -> String {
        if let Some(url) = &self.database_url {
            return url.clone();
        }
        let user = urlencoding::encode(&self.db_user);
        let name = urlencoding::encode(&self.db_name);
        if self.db_password.is_empty() {
            format!("mysql://{}@{}/{}", user, self.db_host, name)
        } else {
            let password = urlencoding::encode(&self.db_password);
            format!("mysql://{}:{}@{}/{}", user, password, self.db_host, name)
        }
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, BoxError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name).filter(|s| !s.is_empty()) {
        Some(raw) => raw
            .parse()
            .map_err(|e| format!("{name} has invalid value '{raw}': {e}").into()),
        None => Ok(default),
    }
}
