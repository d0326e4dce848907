use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub pool: PoolStats,
}

/// Connection pool occupancy at the time of the check.
#[derive(Serialize)]
pub struct PoolStats {
    /// Open connections, idle or in use.
    pub size: u32,
    pub idle: usize,
}

/// GET /health -- 200 with pool statistics when `SELECT 1` succeeds,
/// otherwise a 503 error body.
async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    loanbook_db::health_check(&state.pool)
        .await
        .map_err(AppError::DatabaseUnavailable)?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        pool: PoolStats {
            size: state.pool.size(),
            idle: state.pool.num_idle(),
        },
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
