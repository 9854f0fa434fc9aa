// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use faleproxy::{
    api::{ApiConfig, AppState},
    content::{ContentFetchConfig, ContentFetcher},
    rewrite::{DocumentTransformer, RewriteConfig, TermRewriter},
};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🚀 Starting Faleproxy...\n");
    println!("📦 BUILD VERSION: {}", faleproxy::version::VERSION);
    println!("📅 Build Date: {}", faleproxy::version::BUILD_DATE);
    println!();

    // Term rewriting configuration
    let rewrite_config = RewriteConfig::from_env();
    let rewriter = TermRewriter::new(&rewrite_config)?;
    tracing::info!(
        "Rewriting '{}' -> '{}'",
        rewrite_config.target_term,
        rewrite_config.replacement_term
    );

    // Outbound fetch configuration
    let fetch_config = ContentFetchConfig::from_env();
    if let Err(e) = fetch_config.validate() {
        anyhow::bail!("Invalid fetch configuration: {}", e);
    }
    if fetch_config.allow_private_hosts {
        tracing::warn!("Private-host fetching is enabled");
    }
    let fetcher = ContentFetcher::new(fetch_config);

    let state = AppState::new(DocumentTransformer::new(rewriter), fetcher);
    let config = ApiConfig::from_env();

    faleproxy::api::start_server(config, state).await
}
