// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Top Casts API Server
//!
//! Proxies a Farcaster user's popular casts from the Neynar API and serves
//! the mini-app manifest and swap token descriptors.

use std::sync::Arc;
use topcasts::{config::Config, services::NeynarClient, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Top Casts API");

    if config.neynar_api_key.is_none() {
        // Keep serving the manifest and health endpoints; the feed proxy
        // will answer 500 until the key is configured.
        tracing::warn!("NEYNAR_API_KEY not set; /api/top-posts will be unavailable");
    }

    // Initialize Neynar client
    let neynar = NeynarClient::new(
        config.neynar_base_url.clone(),
        config.neynar_api_key.clone(),
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        neynar,
    });

    // Build router
    let app = topcasts::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("topcasts=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
