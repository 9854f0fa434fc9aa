// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Fetch API request types

use serde::{Deserialize, Serialize};

/// Maximum accepted URL length in characters
const MAX_URL_CHARS: usize = 2048;

/// Request body for POST /fetch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchApiRequest {
    /// Page URL to fetch and rewrite (required)
    #[serde(default)]
    pub url: String,

    /// Optional request ID for tracking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl FetchApiRequest {
    /// Validate the request
    pub fn validate(&self) -> Result<(), String> {
        if self.url.trim().is_empty() {
            return Err("URL is required".to_string());
        }
        if self.url.len() > MAX_URL_CHARS {
            return Err(format!("URL too long (max {} characters)", MAX_URL_CHARS));
        }
        Ok(())
    }
}
