//! SQLite storage bootstrap, endpoint configuration and schema setup.
//!
//! # Responsibility
//! - Describe where the database lives (`DbEndpoint`).
//! - Open and configure SQLite connections.
//! - Hand out one lazily-opened connection per `ConnectionProvider`.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON` and the schema applied.
//! - Schema version is tracked via `PRAGMA user_version`.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

mod open;
mod provider;
pub mod schema;

pub use open::{open_db, open_db_in_memory, open_endpoint};
pub use provider::ConnectionProvider;

/// Environment variable read by [`DbEndpoint::from_env_or_memory`].
pub const DATABASE_URL_ENV: &str = "CRUD_DATABASE_URL";

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    /// The endpoint could not be opened (missing directory, permissions, ...).
    Open {
        endpoint: DbEndpoint,
        source: rusqlite::Error,
    },
    Sqlite(rusqlite::Error),
    InvalidEndpoint(String),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { endpoint, source } => {
                write!(f, "failed to open database `{endpoint}`: {source}")
            }
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::InvalidEndpoint(value) => write!(f, "invalid database url `{value}`"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Sqlite(err) => Some(err),
            Self::InvalidEndpoint(_) | Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Target database for a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbEndpoint {
    /// Private in-memory database; every open yields an empty one.
    Memory,
    File(PathBuf),
}

impl DbEndpoint {
    /// Reads [`DATABASE_URL_ENV`], falling back to an in-memory database.
    pub fn from_env_or_memory() -> DbResult<Self> {
        match std::env::var(DATABASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url.parse(),
            _ => Ok(Self::Memory),
        }
    }

    fn mode(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::File(_) => "file",
        }
    }
}

impl FromStr for DbEndpoint {
    type Err = DbError;

    /// Accepts `sqlite::memory:`, `:memory:`, `sqlite://<path>`,
    /// `sqlite:<path>` or a bare filesystem path.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if matches!(trimmed, "sqlite::memory:" | ":memory:") {
            return Ok(Self::Memory);
        }

        let path = trimmed
            .strip_prefix("sqlite://")
            .or_else(|| trimmed.strip_prefix("sqlite:"))
            .unwrap_or(trimmed);
        if path.is_empty() {
            return Err(DbError::InvalidEndpoint(value.to_string()));
        }
        Ok(Self::File(PathBuf::from(path)))
    }
}

impl Display for DbEndpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => write!(f, "sqlite::memory:"),
            Self::File(path) => write!(f, "sqlite://{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DbEndpoint, DbError};
    use std::path::PathBuf;

    #[test]
    fn parses_memory_urls() {
        assert_eq!("sqlite::memory:".parse::<DbEndpoint>().unwrap(), DbEndpoint::Memory);
        assert_eq!(" :memory: ".parse::<DbEndpoint>().unwrap(), DbEndpoint::Memory);
    }

    #[test]
    fn parses_file_urls_and_bare_paths() {
        let expected = DbEndpoint::File(PathBuf::from("/tmp/shop.db"));
        assert_eq!("sqlite:///tmp/shop.db".parse::<DbEndpoint>().unwrap(), expected);
        assert_eq!("sqlite:/tmp/shop.db".parse::<DbEndpoint>().unwrap(), expected);
        assert_eq!("/tmp/shop.db".parse::<DbEndpoint>().unwrap(), expected);
    }

    #[test]
    fn rejects_empty_urls() {
        assert!(matches!(
            "sqlite://".parse::<DbEndpoint>(),
            Err(DbError::InvalidEndpoint(_))
        ));
        assert!(matches!(
            "  ".parse::<DbEndpoint>(),
            Err(DbError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn env_override_wins_over_memory_default() {
        std::env::set_var(super::DATABASE_URL_ENV, "sqlite:///tmp/crud-env.db");
        let endpoint = DbEndpoint::from_env_or_memory().unwrap();
        std::env::remove_var(super::DATABASE_URL_ENV);

        assert_eq!(endpoint, DbEndpoint::File(PathBuf::from("/tmp/crud-env.db")));
        assert_eq!(DbEndpoint::from_env_or_memory().unwrap(), DbEndpoint::Memory);
    }

    #[test]
    fn display_round_trips_through_parse() {
        let endpoint = DbEndpoint::File(PathBuf::from("/var/lib/shop.db"));
        let reparsed: DbEndpoint = endpoint.to_string().parse().unwrap();
        assert_eq!(reparsed, endpoint);
    }
}
