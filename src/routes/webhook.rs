// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Webhook route for mini-app lifecycle events.
//!
//! The manifest advertises this endpoint; the host platform posts events
//! like `frame_added` / `frame_removed` here. Nothing is persisted - the
//! event is logged and acknowledged.

use crate::AppState;
use axum::{extract::Json, http::StatusCode, routing::post, Router};
use serde::Deserialize;
use std::sync::Arc;

/// Webhook routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/webhook", post(handle_event))
}

/// Mini-app webhook event envelope.
#[derive(Deserialize, Debug)]
struct WebhookEvent {
    #[serde(default)]
    event: Option<String>,
}

/// Handle incoming webhook events (POST).
async fn handle_event(Json(payload): Json<serde_json::Value>) -> StatusCode {
    let event: WebhookEvent = match serde_json::from_value(payload.clone()) {
        Ok(e) => e,
        Err(e) => {
            tracing::error!(error = %e, "Failed to parse webhook event");
            return StatusCode::OK; // Still return 200 to avoid host retries
        }
    };

    tracing::info!(
        event = event.event.as_deref().unwrap_or("unknown"),
        payload = %payload,
        "Webhook event received"
    );

    StatusCode::OK
}
