// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Fetch-and-rewrite API endpoint
//!
//! Provides the `/fetch` HTTP endpoint: download a page, rewrite its text,
//! return the result.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::fetch_handler;
pub use request::FetchApiRequest;
pub use response::FetchApiResponse;
