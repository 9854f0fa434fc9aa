// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::fetch::fetch_handler;
use super::ApiError;
use crate::content::{ContentFetchConfig, ContentFetcher};
use crate::rewrite::{DocumentTransformer, RewriteConfig, TermRewriter};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub listen_addr: String,
    pub public_dir: PathBuf,
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3001".to_string());
        Self {
            listen_addr: format!("{}:{}", host, port),
            public_dir: env::var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public")),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3001".to_string(),
            public_dir: PathBuf::from("public"),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub transformer: Arc<DocumentTransformer>,
    pub fetcher: Arc<ContentFetcher>,
}

impl AppState {
    pub fn new(transformer: DocumentTransformer, fetcher: ContentFetcher) -> Self {
        Self {
            transformer: Arc::new(transformer),
            fetcher: Arc::new(fetcher),
        }
    }

    pub fn new_for_test() -> Self {
        let rewriter =
            TermRewriter::new(&RewriteConfig::default()).expect("default rewrite config is valid");
        let fetch_config = ContentFetchConfig {
            timeout_secs: 5,
            // Tests fetch from loopback fixture servers
            allow_private_hosts: true,
            ..ContentFetchConfig::default()
        };

        Self::new(
            DocumentTransformer::new(rewriter),
            ContentFetcher::new(fetch_config),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: serde_json::Value,
}

/// Build the application router
pub fn create_app(config: &ApiConfig, state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Fetch-and-rewrite endpoint
        .route("/fetch", post(fetch_handler))
        // Landing page and other static assets
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind and serve until a shutdown signal arrives
pub async fn start_server(config: ApiConfig, state: AppState) -> anyhow::Result<()> {
    let app = create_app(&config, state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    let addr = listener.local_addr()?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received, stopping server");
    }
}

async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: crate::version::get_version_info(),
    })
}

// Error response wrapper
pub struct ApiErrorResponse {
    pub error: ApiError,
    pub request_id: Option<String>,
}

impl ApiErrorResponse {
    pub fn new(error: ApiError) -> Self {
        Self {
            error,
            request_id: None,
        }
    }

    pub fn with_request_id(error: ApiError, request_id: Option<String>) -> Self {
        Self { error, request_id }
    }
}

impl From<ApiError> for ApiErrorResponse {
    fn from(error: ApiError) -> Self {
        Self::new(error)
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = self.error.to_response(self.request_id);

        (status, Json(body)).into_response()
    }
}
