//! REST API endpoints for querying exchange trading results.
//!
//! All three endpoints are read-only and cached: a response is keyed by the
//! endpoint and its canonical parameters, and served from the cache until it
//! expires or the scheduled clear empties it.

mod dates;
mod results;

use crate::{ApiApplication, error::ApiError};
use aide::axum::{ApiRouter, routing::get};
use tracing::{Level, event};

/// Creates a router with the trading-result endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route_with("/trading-dates", get(dates::trading_dates::<T>), |op| {
            op.tag("trading")
        })
        .api_route_with(
            "/results-by-date",
            get(results::results_by_date::<T>),
            |op| op.tag("trading"),
        )
        .api_route_with("/last-results", get(results::last_results::<T>), |op| {
            op.tag("trading")
        })
}

/// Log a repository failure and turn it into a `503`.
fn unavailable(err: impl std::error::Error) -> ApiError {
    event!(Level::ERROR, err = err.to_string());
    ApiError::StorageUnavailable("trading results are temporarily unavailable".to_string())
}
