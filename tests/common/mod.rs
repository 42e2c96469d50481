//! Helpers shared by the HTTP-level tests.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use notes_server::{create_router, store::MemoryStore, AppState, Config};
use serde_json::Value;
use tower::ServiceExt;

pub const JWT_SECRET: &str = "integration-test-secret";

/// Subsequent calls are ignored.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("notes_server=debug"))
        .try_init();
}

pub fn test_config() -> Config {
    Config {
        database_url: String::new(),
        database_max_connections: 1,
        jwt_secret: JWT_SECRET.to_owned(),
        jwt_expires_in_days: 7,
        port: 0,
    }
}

pub fn test_app() -> (Router, Arc<MemoryStore>) {
    init_tracing();
    let store = Arc::new(MemoryStore::new());
    let app = create_router(Arc::new(AppState {
        store: store.clone(),
        config: test_config(),
    }));
    (app, store)
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn signup(app: &Router, username: &str, password: &str) -> StatusCode {
    let body = serde_json::json!({ "username": username, "password": password });
    send(app, Method::POST, "/signup", None, Some(body)).await.0
}

/// Registers the user and returns a bearer token for them.
pub async fn signup_and_signin(app: &Router, username: &str, password: &str) -> String {
    assert_eq!(signup(app, username, password).await, StatusCode::CREATED);
    let body = serde_json::json!({ "username": username, "password": password });
    let (status, json) = send(app, Method::POST, "/signin", None, Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    json["token"].as_str().unwrap().to_owned()
}
