//! Route definitions for the `/loans` resource and its nested payments.

use axum::routing::get;
use axum::Router;

use crate::handlers::{loan, payment};
use crate::state::AppState;

/// Routes mounted at `/loans`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PATCH  /{id}            -> update
/// DELETE /{id}            -> delete
///
/// GET    /{id}/payments   -> payment::list_by_loan
/// POST   /{id}/payments   -> payment::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(loan::list).post(loan::create))
        .route(
            "/{id}",
            get(loan::get_by_id)
                .patch(loan::update)
                .delete(loan::delete),
        )
        .route(
            "/{id}/payments",
            get(payment::list_by_loan).post(payment::create),
        )
}
