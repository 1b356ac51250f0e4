#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use edupath_api::{
    config::Config,
    create_router,
    services::{profile_store::MemoryProfileStore, AppState},
};
use std::sync::Arc;
use tower::ServiceExt;

pub async fn create_test_app() -> Router {
    create_test_app_with(Config {
        assistant_delay_ms: 20,
        ..Config::default()
    })
}

pub fn create_test_app_with(config: Config) -> Router {
    // Initialize tracing for tests
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let app_state = Arc::new(AppState::with_store(
        config,
        Arc::new(MemoryProfileStore::new()),
    ));

    create_router(app_state)
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    client_id: &str,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-client-id", client_id);

    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

/// Sends the request and decodes a JSON body (Null for empty bodies).
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    client_id: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let response = send(app, method, uri, client_id, body).await;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        return (status, serde_json::Value::Null);
    }
    let json = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        panic!(
            "non-JSON body for {} {}: {}",
            method,
            uri,
            String::from_utf8_lossy(&bytes)
        )
    });
    (status, json)
}

pub async fn sign_up(app: &Router, client_id: &str) -> serde_json::Value {
    let (status, user) = send_json(
        app,
        "POST",
        "/api/v1/auth/signup",
        client_id,
        Some(serde_json::json!({
            "name": "Asha Verma",
            "email": "asha@example.com"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    user
}
