// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Fetch endpoint tests for POST /fetch
//!
//! These tests verify that:
//! - A missing URL yields 400 with the exact message "URL is required"
//! - An over-long URL yields 400
//! - A failed fetch yields 502 with a message containing "Failed to fetch content"
//! - URL screening failures surface as fetch failures, not crashes

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use faleproxy::api::{create_app, ApiConfig, AppState};
use faleproxy::content::{ContentFetchConfig, ContentFetcher};
use faleproxy::rewrite::{DocumentTransformer, RewriteConfig, TermRewriter};
use serde_json::Value;
use tower::util::ServiceExt;

fn test_app() -> axum::Router {
    create_app(&ApiConfig::default(), AppState::new_for_test())
}

/// App with default (screening) fetch config instead of the test one
fn screening_app() -> axum::Router {
    let rewriter = TermRewriter::new(&RewriteConfig::default()).unwrap();
    let state = AppState::new(
        DocumentTransformer::new(rewriter),
        ContentFetcher::new(ContentFetchConfig::default()),
    );
    create_app(&ApiConfig::default(), state)
}

async fn post_fetch(app: axum::Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/fetch")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, body)
}

#[tokio::test]
async fn test_missing_url_returns_400() {
    let (status, body) = post_fetch(test_app(), "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "URL is required");
    assert_eq!(body["error_type"], "invalid_request");
}

#[tokio::test]
async fn test_blank_url_returns_400() {
    let (status, body) = post_fetch(test_app(), r#"{"url": "   "}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "URL is required");
}

#[tokio::test]
async fn test_overlong_url_returns_400() {
    let url = format!("https://example.com/{}", "a".repeat(2048));
    let body_json = serde_json::json!({ "url": url }).to_string();

    let (status, body) = post_fetch(test_app(), &body_json).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("URL too long"));
}

#[tokio::test]
async fn test_connection_refused_returns_502() {
    // Port 1 is never listening; private hosts are allowed in the test state
    let (status, body) = post_fetch(test_app(), r#"{"url": "http://127.0.0.1:1/"}"#).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Failed to fetch content"));
    assert_eq!(body["error_type"], "fetch_failed");
}

#[tokio::test]
async fn test_screened_url_returns_502() {
    let (status, body) = post_fetch(screening_app(), r#"{"url": "http://localhost/admin"}"#).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Failed to fetch content"));
    assert!(message.contains("Unsafe URL blocked"));
}

#[tokio::test]
async fn test_request_id_is_echoed_on_errors() {
    let (status, body) =
        post_fetch(test_app(), r#"{"url": "", "requestId": "req-9"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["request_id"], "req-9");
}
