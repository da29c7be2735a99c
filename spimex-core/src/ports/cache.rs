use std::time::Duration;

/// A key-value store for serialized responses.
///
/// The cache is an optimization only. Callers must treat any error as a
/// miss and go to the repository instead.
pub trait ResponseCache {
    /// The error type for cache operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Look up an unexpired entry.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<Vec<u8>>, Self::Error>> + Send;

    /// Store an entry that expires after `ttl`, replacing any existing one.
    fn set(
        &self,
        key: &str,
        value: Vec<u8>,
        ttl: Duration,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Drop every entry.
    fn clear(&self) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
