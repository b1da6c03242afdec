// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP client for the feed proxy.

use crate::models::{Post, TopPostsResponse};

/// Errors surfaced to the viewer. Every variant renders as a
/// human-readable message; nothing propagates past the viewer as a fault.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Client for `GET /api/top-posts`.
#[derive(Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    base_url: String,
}

impl FeedClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the subject's top casts from the proxy.
    ///
    /// One outbound call, no retry, platform-default timeout. The viewer
    /// passes no `viewerId` unless it differs from the subject; the proxy
    /// defaults it.
    pub async fn top_posts(
        &self,
        fid: u64,
        viewer_fid: Option<u64>,
    ) -> Result<Vec<Post>, FeedError> {
        let mut request = self
            .http
            .get(format!("{}/api/top-posts", self.base_url))
            .query(&[("subjectId", fid.to_string())]);
        if let Some(viewer) = viewer_fid {
            request = request.query(&[("viewerId", viewer.to_string())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FeedError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status,
                message: error_body_message(&body, status),
            });
        }

        let body: TopPostsResponse = response
            .json()
            .await
            .map_err(|e| FeedError::Decode(e.to_string()))?;

        Ok(body.casts)
    }
}

/// Pull a displayable message out of a proxy error body.
///
/// The proxy answers `{"error": <slug>, "details": <message?>}`; prefer the
/// details, fall back to the slug, then to a generic line with the status.
fn error_body_message(body: &str, status: u16) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(details) = value.get("details").and_then(|v| v.as_str()) {
            return details.to_string();
        }
        if let Some(error) = value.get("error").and_then(|v| v.as_str()) {
            return error.to_string();
        }
    }
    format!("Failed to fetch casts (HTTP {})", status)
}
