pub mod health;
pub mod loan;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /loans                     list, create
/// /loans/{id}                get, update (PATCH), delete
/// /loans/{id}/payments       list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/loans", loan::router())
}
