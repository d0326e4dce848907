use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use loanbook_core::error::CoreError;
use loanbook_core::validation::FieldViolation;
use serde::Serialize;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
/// A failing request never takes the process down with it.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `loanbook_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route matches the request path.
    #[error("No route for {0}")]
    UnknownRoute(String),

    /// The path exists but does not accept the request method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    RequestTimeout,

    /// The request body exceeds the body size limit.
    #[error("Payload too large")]
    PayloadTooLarge,

    /// The database could not be reached while checking service health.
    #[error("Database unavailable: {0}")]
    DatabaseUnavailable(sqlx::Error),

    /// A failure outside any handler's control (panic, middleware error).
    /// The message is logged, never returned to the client.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// JSON error body: `{ "code": ..., "errors": [ { "field"?, "message" } ] }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub errors: Vec<ErrorEntry>,
}

/// One entry of [`ErrorBody::errors`]. `field` is present for field-level errors.
#[derive(Debug, Serialize)]
pub struct ErrorEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

impl ErrorEntry {
    fn general(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

impl From<&FieldViolation> for ErrorEntry {
    fn from(violation: &FieldViolation) -> Self {
        Self {
            field: Some(violation.field.clone()),
            message: violation.message().to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, errors) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    vec![ErrorEntry::general(format!(
                        "{entity} with id {id} not found"
                    ))],
                ),
                CoreError::Validation(violations) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    violations.iter().map(ErrorEntry::from).collect(),
                ),
            },

            // --- Database errors ---
            // Lookups return `Option`, so a missing row never arrives here;
            // foreign-key violations are translated by the handlers.
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal()
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                vec![ErrorEntry::general(msg.clone())],
            ),
            AppError::UnknownRoute(path) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                vec![ErrorEntry::general(format!("No route for {path}"))],
            ),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                vec![ErrorEntry::general("Method not allowed")],
            ),
            AppError::RequestTimeout => (
                StatusCode::REQUEST_TIMEOUT,
                "REQUEST_TIMEOUT",
                vec![ErrorEntry::general("Request timed out")],
            ),
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                vec![ErrorEntry::general("Request body is too large")],
            ),
            AppError::DatabaseUnavailable(err) => {
                tracing::error!(error = %err, "Database unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "SERVICE_UNAVAILABLE",
                    vec![ErrorEntry::general("Database is unavailable")],
                )
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        (status, axum::Json(ErrorBody { code, errors })).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, Vec<ErrorEntry>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        vec![ErrorEntry::general("An internal error occurred")],
    )
}
