// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Fetch API response types

use serde::{Deserialize, Serialize};

use crate::rewrite::TransformedPage;

/// Response body for POST /fetch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchApiResponse {
    /// Always true on the success path
    pub success: bool,

    /// Rewritten HTML document
    pub content: String,

    /// Rewritten page title; empty when the page has none
    pub title: String,

    /// URL the content was fetched from, echoed back
    pub original_url: String,
}

impl FetchApiResponse {
    /// Create a response from a transformed page
    pub fn new(page: TransformedPage, original_url: String) -> Self {
        Self {
            success: true,
            content: page.html,
            title: page.title,
            original_url,
        }
    }
}
