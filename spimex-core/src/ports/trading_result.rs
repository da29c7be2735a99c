use crate::models::{ResultFilter, TradingDate, TradingResult};

/// Repository interface for reading trading results.
///
/// Both operations are read-only and stateless: identical arguments against
/// an unchanged store return identical output, which is what makes the
/// responses safe to cache.
pub trait TradingResultRepository: super::Repository {
    /// Query trading results matching every present filter.
    ///
    /// Absent filters place no constraint. A date range is inclusive on both
    /// ends. When `last_only` is set, rows are further restricted to the
    /// most recent session date in the *entire* store, so the result is empty
    /// if nothing matching the other filters traded on that date.
    ///
    /// # Returns
    ///
    /// The matching rows ordered by `date` descending, then
    /// `exchange_product_id` ascending. Callers must not re-sort.
    fn query_results(
        &self,
        filter: &ResultFilter,
        last_only: bool,
    ) -> impl Future<Output = Result<Vec<TradingResult>, Self::Error>> + Send;

    /// Get the `limit` most recent distinct session dates.
    ///
    /// # Returns
    ///
    /// Dates in descending order without duplicates. Empty if `limit <= 0`;
    /// every date if fewer than `limit` exist.
    fn distinct_trading_dates(
        &self,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<TradingDate>, Self::Error>> + Send;
}
