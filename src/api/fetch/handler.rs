// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Fetch API endpoint handler

use axum::{extract::State, Json};
use std::time::Instant;
use tracing::{debug, info, warn};

use super::request::FetchApiRequest;
use super::response::FetchApiResponse;
use crate::api::http_server::{ApiErrorResponse, AppState};
use crate::api::ApiError;

/// POST /fetch - Fetch a page and rewrite its text content
///
/// # Request
/// - `url`: Page URL to fetch (required, max 2048 chars)
/// - `requestId`: Optional request ID for tracking
///
/// # Response
/// - `success`: Always true on success
/// - `content`: Rewritten HTML document
/// - `title`: Rewritten page title (empty if the page has none)
/// - `originalUrl`: The URL that was fetched
///
/// # Errors
/// - 400 Bad Request: Missing or invalid URL
/// - 502 Bad Gateway: Upstream fetch failed
pub async fn fetch_handler(
    State(state): State<AppState>,
    Json(request): Json<FetchApiRequest>,
) -> Result<Json<FetchApiResponse>, ApiErrorResponse> {
    debug!("Fetch request: {:?}", request.url);

    if let Err(message) = request.validate() {
        warn!("Fetch validation failed: {}", message);
        return Err(ApiErrorResponse::with_request_id(
            ApiError::InvalidRequest(message),
            request.request_id,
        ));
    }

    let started = Instant::now();

    let html = state.fetcher.fetch_page(&request.url).await.map_err(|e| {
        warn!("Fetch failed for {}: {}", request.url, e);
        ApiErrorResponse::with_request_id(
            ApiError::FetchFailed(format!("Failed to fetch content: {}", e)),
            request.request_id.clone(),
        )
    })?;

    let page = state.transformer.transform(&html);

    info!(
        "Rewrote {} ({} bytes in, {} bytes out) in {}ms",
        request.url,
        html.len(),
        page.html.len(),
        started.elapsed().as_millis()
    );

    Ok(Json(FetchApiResponse::new(page, request.url)))
}
