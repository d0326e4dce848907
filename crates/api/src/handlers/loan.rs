//! Handlers for the `/loans` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use loanbook_core::error::CoreError;
use loanbook_core::types::DbId;
use loanbook_db::models::loan::{CreateLoan, Loan, UpdateLoan};
use loanbook_db::repositories::LoanRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{PathId, ValidatedJson};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Loan", id })
}

/// GET /loans
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Loan>>> {
    let loans = LoanRepo::list(&state.pool).await?;
    Ok(Json(loans))
}

/// GET /loans/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<Loan>> {
    let loan = LoanRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(loan))
}

/// POST /loans
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateLoan>,
) -> AppResult<(StatusCode, Json<Loan>)> {
    let loan = LoanRepo::create(&state.pool, &input).await?;
    tracing::info!(loan_id = loan.loan_id, "Loan created");
    Ok((StatusCode::CREATED, Json(loan)))
}

/// PATCH /loans/{id}
///
/// Replaces nickname, interest rate and description. All three are required.
pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(input): ValidatedJson<UpdateLoan>,
) -> AppResult<Json<Loan>> {
    let loan = LoanRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(loan_id = id, "Loan updated");
    Ok(Json(loan))
}

/// DELETE /loans/{id}
///
/// Irreversible: removes the loan and every payment recorded against it.
pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<String>> {
    if !LoanRepo::delete_cascade(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(loan_id = id, "Loan deleted");
    Ok(Json(format!("Successfully deleted loan with id {id}")))
}
