//! Handlers for payments, nested under loans: `/loans/{id}/payments`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use loanbook_core::error::CoreError;
use loanbook_db::models::payment::{CreatePayment, Payment};
use loanbook_db::repositories::PaymentRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{PathId, ValidatedJson};
use crate::state::AppState;

/// POST /loans/{id}/payments
///
/// An unknown loan is reported as 404 via the payment foreign key.
pub async fn create(
    State(state): State<AppState>,
    PathId(loan_id): PathId,
    ValidatedJson(input): ValidatedJson<CreatePayment>,
) -> AppResult<(StatusCode, Json<Payment>)> {
    let payment = PaymentRepo::create(&state.pool, loan_id, &input)
        .await
        .map_err(|e| {
            if loanbook_db::is_foreign_key_violation(&e) {
                AppError::Core(CoreError::NotFound {
                    entity: "Loan",
                    id: loan_id,
                })
            } else {
                AppError::Database(e)
            }
        })?;
    tracing::info!(loan_id, payment_id = payment.payment_id, "Payment recorded");
    Ok((StatusCode::CREATED, Json(payment)))
}

/// GET /loans/{id}/payments
pub async fn list_by_loan(
    State(state): State<AppState>,
    PathId(loan_id): PathId,
) -> AppResult<Json<Vec<Payment>>> {
    let payments = PaymentRepo::list_by_loan(&state.pool, loan_id).await?;
    Ok(Json(payments))
}
