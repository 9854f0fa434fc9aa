// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! End-to-end proxy workflow tests
//!
//! A loopback fixture server plays the upstream site; the full router runs
//! the fetch → transform → respond pipeline against it.

use std::net::SocketAddr;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use faleproxy::api::{create_app, ApiConfig, AppState};
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tower::util::ServiceExt;

const UPSTREAM_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Yale University Test Page</title></head>
<body>
  <h1>Welcome to Yale University</h1>
  <a href="https://www.yale.edu/about">About Yale</a>
  <img src="logo.png" alt="Yale Logo">
</body>
</html>"#;

/// Serve a fixed HTTP response for every connection, returning the address
async fn spawn_upstream(status_line: &'static str, body: &'static str) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;

                let response = format!(
                    "{status_line}\r\nContent-Type: text/html; charset=utf-8\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

async fn post_fetch(url: &str) -> (StatusCode, Value) {
    let app = create_app(&ApiConfig::default(), AppState::new_for_test());

    let body_json = serde_json::json!({ "url": url }).to_string();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/fetch")
        .header("content-type", "application/json")
        .body(Body::from(body_json))
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
async fn test_proxy_rewrites_upstream_page() {
    let addr = spawn_upstream("HTTP/1.1 200 OK", UPSTREAM_PAGE).await;
    let url = format!("http://{}/", addr);

    let (status, body) = post_fetch(&url).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["title"], "Fale University Test Page");
    assert_eq!(body["originalUrl"], url);

    let content = body["content"].as_str().unwrap();
    assert!(content.contains("Welcome to Fale University"));
    assert!(content.contains("About Fale"));
    assert!(content.contains(r#"href="https://www.yale.edu/about""#));
    assert!(content.contains(r#"alt="Yale Logo""#));
}

#[tokio::test]
async fn test_proxy_reports_upstream_error_status() {
    let addr = spawn_upstream("HTTP/1.1 404 Not Found", "<html>gone</html>").await;
    let url = format!("http://{}/missing", addr);

    let (status, body) = post_fetch(&url).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Failed to fetch content"));
    assert!(message.contains("404"));
}

#[tokio::test]
async fn test_proxy_passes_through_pages_without_the_term() {
    let addr = spawn_upstream(
        "HTTP/1.1 200 OK",
        "<html><head><title>Other</title></head><body><p>Harvard</p></body></html>",
    )
    .await;
    let url = format!("http://{}/", addr);

    let (status, body) = post_fetch(&url).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Other");
    assert!(body["content"].as_str().unwrap().contains("<p>Harvard</p>"));
}
