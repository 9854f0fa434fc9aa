// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod fetch;
pub mod http_server;

pub use errors::{ApiError, ErrorResponse};
pub use fetch::{fetch_handler, FetchApiRequest, FetchApiResponse};
pub use http_server::{create_app, start_server, ApiConfig, AppState};
