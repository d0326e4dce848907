//! Custom Axum extractors.
//!
//! Both reject with [`AppError`] so malformed input produces the same JSON
//! error body as every other failure.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use loanbook_core::error::CoreError;
use loanbook_core::types::DbId;
use loanbook_core::validation::{evaluate_shape, RequestShape};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

/// Extract a numeric identifier from a single-segment path parameter.
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub DbId);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        raw.parse::<DbId>()
            .map(Self)
            .map_err(|_| AppError::BadRequest(format!("Invalid id '{raw}': expected an integer")))
    }
}

/// JSON body extractor that checks the request shape before deserializing.
///
/// The body is decoded to a [`Value`] first and evaluated against
/// `T::RULES`. Any violation rejects the request with the full ordered list
/// of field errors; the handler (and therefore the database) is never reached.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + RequestShape,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| {
                if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    AppError::PayloadTooLarge
                } else {
                    AppError::BadRequest(e.body_text())
                }
            })?;

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::BadRequest(format!("Malformed JSON body: {e}")))?;

        let Value::Object(fields) = &value else {
            return Err(AppError::BadRequest(
                "Request body must be a JSON object".to_string(),
            ));
        };

        let violations = evaluate_shape::<T>(fields);
        if !violations.is_empty() {
            return Err(CoreError::Validation(violations).into());
        }

        let input = serde_json::from_value(value)
            .map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))?;
        Ok(Self(input))
    }
}
