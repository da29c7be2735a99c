//! Configuration for the trading results database.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the trading results live and how many readers may query them at once.
///
/// # Examples
///
/// ```
/// use spimex_sqlite::config::SqliteConfig;
/// use std::path::PathBuf;
///
/// // In-memory database (default)
/// let config = SqliteConfig::default();
///
/// // A database file shared with the ingest process
/// let config = SqliteConfig {
///     database_path: Some(PathBuf::from("spimex.db")),
///     create_if_missing: false,
///     max_readers: Some(16),
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SqliteConfig {
    /// Database file path. If None, uses in-memory database
    pub database_path: Option<PathBuf>,

    /// Whether to create the database if it doesn't exist
    #[serde(default = "default_true")]
    pub create_if_missing: bool,

    /// Upper bound on pooled read connections (sqlx's default if None)
    #[serde(default)]
    pub max_readers: Option<u32>,
}

fn default_true() -> bool {
    true
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            create_if_missing: true,
            max_readers: None,
        }
    }
}
