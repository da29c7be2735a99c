mod cache;
mod trading_result;

pub use cache::ResponseCache;
pub use trading_result::TradingResultRepository;

use crate::models::QueryLimits;

/// Base trait for the storage backends.
///
/// Implementations pick their own error type; callers treat any error as the
/// store being unavailable.
pub trait Repository {
    /// The error type for underlying storage operations
    type Error: std::error::Error + Send + Sync + 'static;
}

/// Bundles everything a request handler needs.
///
/// The HTTP layer is generic over this trait, so a test can swap in any
/// repository or cache without touching the routes.
pub trait Application {
    /// The store of trading results
    type Repository: TradingResultRepository;

    /// The response cache consulted before the repository
    type Cache: ResponseCache;

    /// Get a handle to the repository
    fn database(&self) -> &Self::Repository;

    /// Get a handle to the response cache
    fn cache(&self) -> &Self::Cache;

    /// The limits requests are validated against
    fn limits(&self) -> &QueryLimits;
}
