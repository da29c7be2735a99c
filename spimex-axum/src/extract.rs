//! A query-string extractor that rejects with `422` instead of axum's `400`.

use crate::error::ApiError;
use aide::{generate::GenContext, openapi::Operation, operation::OperationInput};
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

/// Deserialize the query string into `T`.
///
/// Unknown parameters are ignored. A missing required parameter or a value
/// that fails to parse (a bad date, a wrong-length code) becomes
/// [`ApiError::Unprocessable`].
pub struct ValidQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(|rejection| ApiError::Unprocessable(rejection.body_text()))
    }
}

impl<T: JsonSchema> OperationInput for ValidQuery<T> {
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        Query::<T>::operation_input(ctx, operation);
    }
}
