//! Error responses.
//!
//! Client mistakes become `422 Unprocessable Entity`; storage failures become
//! `503 Service Unavailable`. Both carry a `{"detail": "..."}` body.

use aide::operation::OperationOutput;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use schemars::JsonSchema;
use serde::Serialize;
use spimex_core::models::ValidationError;
use tracing::{Level, event};

/// The ways a request can fail
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The parameters parsed but broke a rule (range order, width, bounds)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The parameters could not be parsed at all
    #[error("{0}")]
    Unprocessable(String),

    /// The repository failed
    #[error("{0}")]
    StorageUnavailable(String),
}

impl ApiError {
    /// The HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// The body of every error response
#[derive(Serialize, JsonSchema)]
pub struct ErrorBody {
    /// A human-readable description naming the offending value
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // the storage failure was logged where it happened
        if status.is_client_error() {
            event!(Level::DEBUG, status = status.as_u16(), detail = %self, "rejected request");
        }
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl OperationOutput for ApiError {
    type Inner = Self;
}
