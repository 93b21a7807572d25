#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use srq_api::config::ApiConfig;
use srq_api::state::AppState;
use srq_auth::jwt::{Claims, issue_token};
use srq_storage::store::Store;
use tower::ServiceExt;

pub const SECRET: &str = "api-test-secret";

pub fn config() -> ApiConfig {
    ApiConfig::from_lookup(|var| match var {
        "SRQ_STORAGE" => Some("memory".to_string()),
        "SRQ_JWT_SECRET" => Some(SECRET.to_string()),
        _ => None,
    })
    .unwrap()
}

/// A router over a freshly seeded in-memory store.
pub async fn app() -> (Router, Store) {
    let store = Store::memory();
    srq_api::catalog::seed(&store).await.unwrap();
    (srq_api::router(AppState::new(store.clone(), &config())), store)
}

pub fn token(sub: &str, is_staff: bool) -> String {
    sign(sub, None, is_staff)
}

/// A regular user's token that also carries a username claim.
pub fn named_token(sub: &str, username: &str) -> String {
    sign(sub, Some(username), false)
}

fn sign(sub: &str, username: Option<&str>, is_staff: bool) -> String {
    let exp = jiff::Timestamp::now().as_second() + 3600;
    issue_token(
        &Claims {
            sub: sub.to_string(),
            exp: exp as u64,
            iss: None,
            username: username.map(str::to_string),
            is_staff,
        },
        SECRET.as_bytes(),
    )
    .unwrap()
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, token, body).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Answers for every catalog question, `yes` of them affirmative.
pub fn answers(yes: usize) -> Value {
    let answers: Vec<Value> = srq_instruments::srq20::questions()
        .iter()
        .enumerate()
        .map(|(i, q)| serde_json::json!({ "question_id": q.id, "value": i < yes }))
        .collect();
    serde_json::json!({ "answers": answers })
}
