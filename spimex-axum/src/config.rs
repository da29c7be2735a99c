//! Configuration types for the Axum HTTP server.
//!
//! This module provides configuration options for the REST API server,
//! including network binding and response caching.

use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, time::Duration};

/// Configuration for the Axum HTTP server.
///
/// # Examples
///
/// ```
/// use spimex_axum::config::AxumConfig;
/// use std::time::Duration;
///
/// // Use default configuration
/// let config = AxumConfig::default();
///
/// // Custom configuration
/// let config = AxumConfig {
///     bind_address: "127.0.0.1:3000".parse().unwrap(),
///     cache_expire: Duration::from_secs(600),
///     cache_capacity: 1_000,
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AxumConfig {
    /// The address to bind the server to
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// How long a cached response stays valid (e.g. "1day", "15m")
    #[serde(default = "default_cache_expire", with = "humantime_serde")]
    pub cache_expire: Duration,

    /// The most responses held in the cache at once
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_cache_expire() -> Duration {
    Duration::from_secs(60 * 60 * 24)
}

fn default_cache_capacity() -> u64 {
    10_000
}

impl Default for AxumConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            cache_expire: default_cache_expire(),
            cache_capacity: default_cache_capacity(),
        }
    }
}
