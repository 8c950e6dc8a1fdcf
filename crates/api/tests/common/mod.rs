#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use tripdesk_api::config::ServerConfig;
use tripdesk_api::router::build_app_router;
use tripdesk_api::state::AppState;

/// Admin token configured by [`build_gated_app`].
pub const TEST_ADMIN_TOKEN: &str = "test-admin-token";

/// Build a test `ServerConfig` with safe defaults and no admin gate.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        admin_token: None,
    }
}

fn build_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Build the full application router (same middleware stack as production)
/// with the admin gate open.
pub fn build_test_app(pool: PgPool) -> Router {
    build_with_config(pool, test_config())
}

/// Build the application with [`TEST_ADMIN_TOKEN`] required on staff routes.
pub fn build_gated_app(pool: PgPool) -> Router {
    build_with_config(
        pool,
        ServerConfig {
            admin_token: Some(TEST_ADMIN_TOKEN.to_string()),
            ..test_config()
        },
    )
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PATCH, uri, body).await
}

async fn json_request(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert the Paris and Kyoto catalog used across the API tests.
pub async fn seed_catalog(pool: &PgPool) {
    sqlx::query("INSERT INTO destinations (id, name) VALUES ('paris', 'Paris'), ('kyoto', 'Kyoto')")
        .execute(pool)
        .await
        .unwrap();
    sqlx::query(
        "INSERT INTO activities (id, destination_id, name) VALUES \
             ('louvre', 'paris', 'Louvre'), \
             ('eiffel', 'paris', 'Eiffel Tower'), \
             ('fushimi', 'kyoto', 'Fushimi Inari')",
    )
    .execute(pool)
    .await
    .unwrap();
}

/// Submit a trip request through the public endpoint and return its JSON.
pub async fn submit_trip(pool: &PgPool) -> serde_json::Value {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/trip-requests",
        serde_json::json!({
            "destination": "paris",
            "contactName": "Ada Lovelace",
            "contactEmail": "ada@example.com",
            "activityIds": ["louvre", "eiffel"],
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["trip"].clone()
}
