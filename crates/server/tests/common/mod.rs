#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use server::routes::build_router;
use server::ServerState;
use service::auth::TokenIssuer;
use service::station::repository::memory::InMemoryStationRepository;
use service::user::repository::memory::InMemoryUserRepository;

pub const SECRET: &str = "test-secret";

pub fn issuer() -> TokenIssuer { TokenIssuer::new(SECRET, chrono::Duration::hours(24)) }

pub fn app() -> Router {
    let state = ServerState::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryStationRepository::new()),
        issuer(),
    );
    build_router(state, tower_http::cors::CorsLayer::very_permissive(), Duration::from_secs(4))
}

pub async fn send(app: &Router, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    send_raw(app, method, uri, token, body.map(|b| b.to_string())).await
}

pub async fn send_raw(app: &Router, method: &str, uri: &str, token: Option<&str>, body: Option<String>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        req = req.header("authorization", format!("Bearer {t}"));
    }
    let req = match body {
        Some(b) => req.header("content-type", "application/json").body(Body::from(b)).unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, json)
}

pub fn user_body(email: &str, phone: &str) -> Value {
    serde_json::json!({"user": {
        "name": "Ann",
        "lastname": "Lee",
        "email": email,
        "phone": phone,
        "password": "S3curePass!"
    }})
}

/// Register a user and return its id and token.
pub async fn register(app: &Router, email: &str, phone: &str) -> (i64, String) {
    let (status, body) = send(app, "POST", "/auth/register", None, Some(user_body(email, phone))).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let id = body["user"]["id"].as_i64().unwrap();
    let token = body["token"].as_str().unwrap().to_string();
    (id, token)
}
