/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The pool is passed in rather than held globally so tests can supply their own.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: loanbook_db::DbPool,
}
