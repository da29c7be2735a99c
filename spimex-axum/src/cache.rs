//! Response caching.
//!
//! Responses are cached as serialized JSON keyed by endpoint and canonical
//! parameters. The cache only ever saves work: a failing or corrupt cache
//! degrades to going straight to the repository.

use moka::{Expiry, future::Cache};
use serde::{Serialize, de::DeserializeOwned};
use spimex_core::ports::ResponseCache;
use std::{
    convert::Infallible,
    sync::Arc,
    time::{Duration, Instant},
};
use tracing::{Level, event};

/// Key prefix for `/api/trading-dates`
pub const TRADING_DATES: &str = "trading-dates";
/// Key prefix for `/api/results-by-date`
pub const RESULTS_BY_DATE: &str = "results-by-date";
/// Key prefix for `/api/last-results`
pub const LAST_RESULTS: &str = "last-results";

// moka rejects expirations past roughly a thousand years
const MAX_TTL: Duration = Duration::from_secs(60 * 60 * 24 * 365 * 30);

/// An in-process cache bounded by entry count, with per-entry expiry.
///
/// Clones share the same storage. Expired entries are reclaimed by the
/// cache's own housekeeping, so keys that are never requested again do not
/// accumulate.
#[derive(Clone)]
pub struct MemoryCache {
    entries: Cache<String, Entry>,
}

#[derive(Clone)]
struct Entry {
    value: Arc<Vec<u8>>,
    ttl: Duration,
}

/// Expire each entry after the ttl it was stored with.
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(&self, _key: &String, value: &Entry, _created_at: Instant) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

impl MemoryCache {
    /// Create an empty cache holding at most `max_capacity` entries
    pub fn new(max_capacity: u64) -> Self {
        let entries = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryTtl)
            .build();
        Self { entries }
    }

    /// The number of live entries, after pending evictions have run
    pub async fn len(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }

    /// Whether the cache holds no live entries
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl ResponseCache for MemoryCache {
    type Error = Infallible;

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, Self::Error> {
        Ok(self
            .entries
            .get(key)
            .await
            .map(|entry| entry.value.as_ref().clone()))
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), Self::Error> {
        let entry = Entry {
            value: Arc::new(value),
            ttl: ttl.min(MAX_TTL),
        };
        self.entries.insert(key.to_owned(), entry).await;
        Ok(())
    }

    async fn clear(&self) -> Result<(), Self::Error> {
        self.entries.invalidate_all();
        Ok(())
    }
}

/// Serve `key` from `cache`, or await `fetch` and remember its output.
///
/// Repository errors pass through and are never cached. Cache errors and
/// entries that no longer decode are logged and treated as misses.
pub(crate) async fn cached<C, T, E, F>(
    cache: &C,
    key: &str,
    ttl: Duration,
    fetch: F,
) -> Result<T, E>
where
    C: ResponseCache,
    T: Serialize + DeserializeOwned,
    F: Future<Output = Result<T, E>>,
{
    match cache.get(key).await {
        Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
            Ok(value) => {
                event!(Level::DEBUG, key, "cache hit");
                return Ok(value);
            }
            Err(err) => {
                event!(Level::WARN, key, err = err.to_string(), "discarding undecodable cache entry");
            }
        },
        Ok(None) => {
            event!(Level::DEBUG, key, "cache miss");
        }
        Err(err) => {
            event!(Level::WARN, key, err = err.to_string(), "cache lookup failed");
        }
    }

    let value = fetch.await?;

    match serde_json::to_vec(&value) {
        Ok(bytes) => {
            if let Err(err) = cache.set(key, bytes, ttl).await {
                event!(Level::WARN, key, err = err.to_string(), "cache store failed");
            }
        }
        Err(err) => {
            event!(Level::WARN, key, err = err.to_string(), "response not serializable for caching");
        }
    }

    Ok(value)
}
