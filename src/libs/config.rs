//! Environment-driven configuration.
//!
//! All settings come from process environment variables, optionally seeded from
//! a `.env` file in the working directory. There is no configuration file.
//!
//! | Variable                    | Default               | Meaning                                   |
//! |-----------------------------|-----------------------|-------------------------------------------|
//! | `DATABASE_URL`              | `sqlite:///./hrms.db` | Database connection target                |
//! | `HRMS_ENFORCE_FOREIGN_KEYS` | `false`               | Enforce `attendance.employee_id` linkage  |
//! | `HRMS_BUSY_TIMEOUT_MS`      | `5000`                | How long to wait on a locked database     |
//! | `LOG_LEVEL`                 | `info`                | Log level when `RUST_LOG` is not set      |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hrms::libs::config::Config;
//!
//! let config = Config::load()?;
//! println!("{}", config.database.target);
//! # Ok::<(), hrms::libs::error::ConfigError>(())
//! ```

use super::error::ConfigError;
use dotenv::dotenv;
use std::env;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:///./hrms.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

const MEMORY_TARGET: &str = ":memory:";

/// Where the SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    File(PathBuf),
    Memory,
}

impl DatabaseTarget {
    /// Parses a connection string.
    ///
    /// Accepts SQLAlchemy-style `sqlite:///relative.db`, `sqlite:////absolute.db`,
    /// `sqlite://` / `sqlite:///:memory:` for an in-memory database, SQLite URI
    /// filenames (`file:hrms.db`, `file:///abs/hrms.db`, `file::memory:`), or a
    /// bare filesystem path. Any other URL scheme is rejected.
    pub fn parse(url: &str) -> Result<Self, ConfigError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "DATABASE_URL",
                value: url.to_string(),
            });
        }

        if let Some(rest) = url.strip_prefix("file:") {
            return Self::from_file_uri(url, rest);
        }

        let Some((scheme, rest)) = url.split_once("://") else {
            return Ok(Self::from_path(url));
        };

        if !matches!(scheme.to_ascii_lowercase().as_str(), "sqlite" | "sqlite3") {
            return Err(ConfigError::UnsupportedScheme(scheme.to_string()));
        }

        match rest {
            "" | MEMORY_TARGET => Ok(DatabaseTarget::Memory),
            _ => match rest.strip_prefix('/') {
                Some(path) if !path.is_empty() => Ok(Self::from_path(path)),
                _ => Err(ConfigError::InvalidValue {
                    key: "DATABASE_URL",
                    value: url.to_string(),
                }),
            },
        }
    }

    /// `rest` is what follows `file:`. Query parameters are dropped and the
    /// authority, when present, must be empty or `localhost`.
    fn from_file_uri(url: &str, rest: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: "DATABASE_URL",
            value: url.to_string(),
        };

        let rest = rest.split_once('?').map_or(rest, |(path, _)| path);
        let path = match rest.strip_prefix("//") {
            Some(authority_and_path) => {
                let (authority, path) = authority_and_path
                    .find('/')
                    .map(|slash| authority_and_path.split_at(slash))
                    .ok_or_else(invalid)?;
                if !(authority.is_empty() || authority.eq_ignore_ascii_case("localhost")) {
                    return Err(invalid());
                }
                path
            }
            None => rest,
        };

        if path.is_empty() {
            return Err(invalid());
        }
        Ok(Self::from_path(path))
    }

    fn from_path(path: &str) -> Self {
        if path == MEMORY_TARGET {
            DatabaseTarget::Memory
        } else {
            DatabaseTarget::File(PathBuf::from(path))
        }
    }
}

impl Display for DatabaseTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseTarget::File(path) => write!(f, "{}", path.display()),
            DatabaseTarget::Memory => f.write_str(MEMORY_TARGET),
        }
    }
}

/// Settings for opening a store connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub target: DatabaseTarget,
    pub enforce_foreign_keys: bool,
    pub busy_timeout_ms: u64,
}

impl DatabaseConfig {
    pub fn new(target: DatabaseTarget) -> Self {
        Self {
            target,
            enforce_foreign_keys: false,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(DatabaseTarget::File(path.into()))
    }

    pub fn memory() -> Self {
        Self::new(DatabaseTarget::Memory)
    }

    pub fn with_foreign_keys(mut self, enforce: bool) -> Self {
        self.enforce_foreign_keys = enforce;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database: DatabaseConfig,
    pub log_level: String,
}

impl Config {
    /// Reads configuration from the environment after loading `.env` if present.
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL").unwrap_or_else(|| {
            debug!("DATABASE_URL not set, using default: {DEFAULT_DATABASE_URL}");
            DEFAULT_DATABASE_URL.to_string()
        });

        let database = DatabaseConfig {
            target: DatabaseTarget::parse(&url)?,
            enforce_foreign_keys: match lookup("HRMS_ENFORCE_FOREIGN_KEYS") {
                Some(value) => parse_bool("HRMS_ENFORCE_FOREIGN_KEYS", &value)?,
                None => false,
            },
            busy_timeout_ms: match lookup("HRMS_BUSY_TIMEOUT_MS") {
                Some(value) => parse_number("HRMS_BUSY_TIMEOUT_MS", &value)?,
                None => DEFAULT_BUSY_TIMEOUT_MS,
            },
        };

        let log_level = lookup("LOG_LEVEL")
            .map(|level| level.trim().to_ascii_lowercase())
            .filter(|level| !level.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self { database, log_level })
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}

fn parse_number<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
