//! The concrete application served by the binary.

use spimex_axum::cache::MemoryCache;
use spimex_core::{models::QueryLimits, ports::Application};
use spimex_sqlite::Db;
use std::sync::Arc;

/// SQLite-backed trading results with an in-process response cache.
///
/// Clones are cheap and share the pools, the cache and the limits.
#[derive(Clone)]
pub struct SpimexApp {
    /// Database connection for the trading results
    pub db: Db,
    /// The response cache, also cleared by the daily schedule
    pub cache: MemoryCache,
    /// Bounds on request parameters
    pub limits: Arc<QueryLimits>,
}

impl Application for SpimexApp {
    type Repository = Db;
    type Cache = MemoryCache;

    fn database(&self) -> &Self::Repository {
        &self.db
    }

    fn cache(&self) -> &Self::Cache {
        &self.cache
    }

    fn limits(&self) -> &QueryLimits {
        &self.limits
    }
}
