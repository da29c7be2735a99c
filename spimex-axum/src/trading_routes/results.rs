use super::unavailable;
use crate::{
    ApiApplication,
    cache::{LAST_RESULTS, RESULTS_BY_DATE, cached},
    config::AxumConfig,
    error::ApiError,
    extract::ValidQuery,
};
use axum::{Extension, Json, extract::State};
use spimex_core::{
    models::{DateRangeFilter, ProductFilter, ResultFilter, TradingResult},
    ports::TradingResultRepository as _,
};
use std::sync::Arc;

/// Query trading results within an inclusive date range.
///
/// `start_date` and `end_date` are required; the product codes narrow the
/// result further when present.
///
/// # Returns
///
/// - `200 OK`: Matching results, newest date first, then by product id
/// - `422 Unprocessable Entity`: A date is missing or malformed, a code has the
///   wrong length, `start_date` is after `end_date`, or the range is too wide
/// - `503 Service Unavailable`: The store could not be queried
pub(crate) async fn results_by_date<T: ApiApplication>(
    State(app): State<T>,
    Extension(config): Extension<Arc<AxumConfig>>,
    ValidQuery(filters): ValidQuery<DateRangeFilter>,
) -> Result<Json<Vec<TradingResult>>, ApiError> {
    let filter = app.limits().validate(filters)?;
    query::<T>(&app, &config, RESULTS_BY_DATE, &filter, false).await
}

/// Query trading results from the most recent session.
///
/// The most recent session is the latest date in the whole store, so a
/// product that did not trade that day yields an empty list rather than its
/// own latest row.
///
/// # Returns
///
/// - `200 OK`: Matching results from the latest session, ordered by product id
/// - `422 Unprocessable Entity`: A code has the wrong length
/// - `503 Service Unavailable`: The store could not be queried
pub(crate) async fn last_results<T: ApiApplication>(
    State(app): State<T>,
    Extension(config): Extension<Arc<AxumConfig>>,
    ValidQuery(filters): ValidQuery<ProductFilter>,
) -> Result<Json<Vec<TradingResult>>, ApiError> {
    let filter = app.limits().validate(filters)?;
    query::<T>(&app, &config, LAST_RESULTS, &filter, true).await
}

async fn query<T: ApiApplication>(
    app: &T,
    config: &AxumConfig,
    prefix: &str,
    filter: &ResultFilter,
    last_only: bool,
) -> Result<Json<Vec<TradingResult>>, ApiError> {
    let key = format!("{prefix}:{filter}");

    let rows = cached(
        app.cache(),
        &key,
        config.cache_expire,
        app.database().query_results(filter, last_only),
    )
    .await
    .map_err(unavailable)?;

    Ok(Json(rows))
}
