use super::unavailable;
use crate::{
    ApiApplication,
    cache::{TRADING_DATES, cached},
    config::AxumConfig,
    error::ApiError,
    extract::ValidQuery,
};
use axum::{Extension, Json, extract::State};
use spimex_core::{models::TradingDate, ports::TradingResultRepository as _};
use std::sync::Arc;

/// Query parameters for the trading-dates endpoint.
#[derive(serde::Deserialize, schemars::JsonSchema)]
pub(crate) struct DaysQuery {
    /// How many of the most recent session dates to return
    days: i64,
}

/// List the most recent trading session dates.
///
/// # Returns
///
/// - `200 OK`: Up to `days` distinct dates, newest first
/// - `422 Unprocessable Entity`: `days` is missing, not an integer, or outside `1..=max_days_limit`
/// - `503 Service Unavailable`: The store could not be queried
pub(crate) async fn trading_dates<T: ApiApplication>(
    State(app): State<T>,
    Extension(config): Extension<Arc<AxumConfig>>,
    ValidQuery(DaysQuery { days }): ValidQuery<DaysQuery>,
) -> Result<Json<Vec<TradingDate>>, ApiError> {
    let days = app.limits().validate_days(days)?;
    let key = format!("{TRADING_DATES}:days={days}");

    let dates = cached(
        app.cache(),
        &key,
        config.cache_expire,
        app.database().distinct_trading_dates(days),
    )
    .await
    .map_err(unavailable)?;

    Ok(Json(dates))
}
