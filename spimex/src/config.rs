//! Application configuration management.
//!
//! This module handles loading and merging configuration from multiple sources
//! with a clear precedence order. Configuration can come from default values,
//! configuration files, and environment variables.

use crate::{Cli, schedule::CacheClearSchedule};
use serde::{Deserialize, Serialize};
use spimex_core::models::QueryLimits;

/// The main application configuration that composes all component configs
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Web server configuration (bind address, cache expiry)
    #[serde(default)]
    pub server: spimex_axum::config::AxumConfig,

    /// Database configuration (file path, pool size)
    #[serde(default)]
    pub database: spimex_sqlite::config::SqliteConfig,

    /// Bounds on request parameters
    #[serde(default)]
    pub limits: QueryLimits,

    /// Daily cache-clear configuration
    #[serde(default)]
    pub schedule: CacheClearSchedule,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. Config file given by the CLI
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `APP_<SECTION>__<KEY>` maps to `<section>.<key>`
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Read trading results from a file
    /// export APP_DATABASE__DATABASE_PATH="/data/spimex.db"
    ///
    /// # Allow wider date ranges
    /// export APP_LIMITS__MAX_DAYS_RANGE=31
    ///
    /// # Clear the cache at 15:00 UTC instead
    /// export APP_SCHEDULE__AT="15:00"
    /// ```
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on config file if it is specified and exists
        if let Some(path) = &cli.config {
            if path.exists() {
                config = config.add_source(config::File::from(path.as_path()))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        // This maps APP_SERVER__BIND_ADDRESS to server.bind_address
        config = config.add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io::Write as _, path::PathBuf, time::Duration};
    use time::macros::time;

    #[test]
    fn test_defaults() {
        let cli = Cli {
            config: None,
            schema: None,
        };
        let config = AppConfig::load(&cli).unwrap();

        assert_eq!(config.server.bind_address.port(), 8080);
        assert_eq!(config.server.cache_expire, Duration::from_secs(86_400));
        assert_eq!(config.server.cache_capacity, 10_000);
        assert_eq!(config.limits, QueryLimits::default());
        assert_eq!(config.schedule.at, Some(time!(14:11)));
        assert!(config.database.database_path.is_none());
    }

    #[test]
    fn test_file_overrides() {
        let path = std::env::temp_dir().join(format!("spimex-config-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[server]
cache_expire = "15m"
cache_capacity = 500

[limits]
max_days_range = 31

[schedule]
at = "03:05"
"#
        )
        .unwrap();

        let cli = Cli {
            config: Some(path.clone()),
            schema: None,
        };
        let config = AppConfig::load(&cli);
        std::fs::remove_file(&path).unwrap();
        let config = config.unwrap();

        assert_eq!(config.server.cache_expire, Duration::from_secs(15 * 60));
        assert_eq!(config.server.cache_capacity, 500);
        assert_eq!(config.limits.max_days_range, 31);
        assert_eq!(config.limits.max_days_limit, 365);
        assert_eq!(config.schedule.at, Some(time!(03:05)));
    }

    #[test]
    fn test_missing_file() {
        let cli = Cli {
            config: Some(PathBuf::from("/definitely/not/here.toml")),
            schema: None,
        };
        assert!(AppConfig::load(&cli).is_err());
    }
}
