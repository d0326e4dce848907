//! HTTP-level integration tests for the `/loans/{id}/payments` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, error_fields, get, post_json};
use serde_json::{json, Value};
use sqlx::PgPool;

async fn create_loan(pool: &PgPool) -> i64 {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/loans",
        json!({
            "nickname": "Mortgage",
            "starting_amount": 250000,
            "interest_rate": 6.1,
            "current_amount_owed": 248000.5
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["loan_id"].as_i64().unwrap()
}

fn payment(date: &str) -> Value {
    json!({"payment_date": date, "principal_paid": 512.34, "interest_paid": 1267.1})
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_payment_returns_201_with_stored_row(pool: PgPool) {
    let loan_id = create_loan(&pool).await;

    let response = post_json(
        common::build_test_app(pool),
        &format!("/loans/{loan_id}/payments"),
        payment("2024-03-15"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["payment_id"].as_i64().unwrap() > 0);
    assert_eq!(json["loan_id"], loan_id);
    assert_eq!(json["payment_date"], "2024-03-15");
    assert_eq!(json["principal_paid"].as_f64(), Some(512.34));
    assert_eq!(json["interest_paid"].as_f64(), Some(1267.1));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn created_payment_appears_in_loan_listing(pool: PgPool) {
    let loan_id = create_loan(&pool).await;
    let other_loan = create_loan(&pool).await;

    let created = body_json(
        post_json(
            common::build_test_app(pool.clone()),
            &format!("/loans/{loan_id}/payments"),
            payment("2024-04-01"),
        )
        .await,
    )
    .await;
    post_json(
        common::build_test_app(pool.clone()),
        &format!("/loans/{other_loan}/payments"),
        payment("2024-04-02"),
    )
    .await;

    let response = get(
        common::build_test_app(pool),
        &format!("/loans/{loan_id}/payments"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([created]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn payments_are_listed_by_date(pool: PgPool) {
    let loan_id = create_loan(&pool).await;
    for date in ["2024-06-01", "2024-01-01", "2024-03-01"] {
        post_json(
            common::build_test_app(pool.clone()),
            &format!("/loans/{loan_id}/payments"),
            payment(date),
        )
        .await;
    }

    let json = body_json(
        get(
            common::build_test_app(pool),
            &format!("/loans/{loan_id}/payments"),
        )
        .await,
    )
    .await;
    let dates: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["payment_date"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(dates, vec!["2024-01-01", "2024-03-01", "2024-06-01"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_payments_for_loan_without_payments_is_empty(pool: PgPool) {
    let loan_id = create_loan(&pool).await;
    let response = get(
        common::build_test_app(pool),
        &format!("/loans/{loan_id}/payments"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_payment_with_missing_fields_returns_400(pool: PgPool) {
    let loan_id = create_loan(&pool).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        &format!("/loans/{loan_id}/payments"),
        json!({"principal_paid": 10}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(error_fields(&json), vec!["payment_date", "interest_paid"]);
    assert_eq!(json["errors"][0]["message"], "This field is required.");

    let listed = body_json(
        get(
            common::build_test_app(pool),
            &format!("/loans/{loan_id}/payments"),
        )
        .await,
    )
    .await;
    assert_eq!(listed, json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_payment_with_invalid_date_returns_400(pool: PgPool) {
    let loan_id = create_loan(&pool).await;

    let response = post_json(
        common::build_test_app(pool),
        &format!("/loans/{loan_id}/payments"),
        payment("15/03/2024"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(error_fields(&json), vec!["payment_date"]);
    assert_eq!(json["errors"][0]["message"], "Unknown Error.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_payment_for_unknown_loan_returns_404(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/loans/999999/payments",
        payment("2024-03-15"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["errors"][0]["message"], "Loan with id 999999 not found");
}
