#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use loanbook_api::config::{DatabaseConfig, ServerConfig};
use loanbook_api::router::build_app_router;
use loanbook_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// The database section is never used to connect: tests receive their pool
/// from `#[sqlx::test]`.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database: DatabaseConfig {
            host: "localhost".to_string(),
            port: 5432,
            user: "test".to_string(),
            password: "test".to_string(),
            name: "test".to_string(),
            max_connections: 5,
            acquire_timeout_secs: 5,
        },
    }
}

/// Build the full application router, with the production middleware
/// stack, around the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, &test_config())
}

/// Same as [`build_test_app`], with caller-supplied server settings.
pub fn build_test_app_with_config(pool: PgPool, config: &ServerConfig) -> Router {
    build_app_router(AppState { pool }, config)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body.to_string())).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body.to_string())).await
}

/// Send a raw, possibly malformed, body.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(body.to_string())).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Field names listed in a validation error body, in order.
pub fn error_fields(json: &serde_json::Value) -> Vec<String> {
    json["errors"]
        .as_array()
        .expect("errors should be an array")
        .iter()
        .filter_map(|e| e["field"].as_str().map(str::to_string))
        .collect()
}
