// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Neynar API client for fetching a user's popular casts.
//!
//! Handles:
//! - The authenticated upstream GET (API key header, never logged or echoed)
//! - Surfacing upstream failures with their own status and message
//! - Normalizing the upstream cast shape into [`Post`]

use crate::error::AppError;
use crate::models::{Embed, EmbedRef, Engagement, Post, PostAuthor};
use serde::Deserialize;

/// Neynar API client.
#[derive(Clone)]
pub struct NeynarClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl NeynarClient {
    /// Create a new client. With no key configured, every fetch fails with
    /// a configuration error before any upstream call.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Fetch a user's popular casts, ordered by popularity upstream.
    ///
    /// Makes exactly one outbound call. The returned casts keep the
    /// upstream ordering; no re-ranking or deduplication happens here.
    pub async fn popular_casts(
        &self,
        fid: u64,
        viewer_fid: u64,
    ) -> Result<Vec<NeynarCast>, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Config("Neynar API key not configured".to_string()))?;

        let url = format!("{}/v2/farcaster/cast/user/popular", self.base_url);
        let response = self
            .http
            .get(&url)
            .header("api_key", api_key)
            .header("Content-Type", "application/json")
            .query(&[
                ("fid", fid.to_string()),
                ("viewer_fid", viewer_fid.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Neynar request failed: {}", e)))?;

        let response = self.check_response(response).await?;

        let body: NeynarFeedResponse = response.json().await.map_err(|e| {
            AppError::Internal(anyhow::anyhow!("Neynar response parse error: {}", e))
        })?;

        Ok(body.casts)
    }

    /// Map a non-success upstream response to an error carrying the
    /// upstream's status and, best effort, its own message.
    async fn check_response(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, AppError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status, "Neynar API error");

        Err(AppError::Upstream {
            status,
            message: upstream_error_message(&body),
        })
    }
}

/// Extract an error message from an upstream error body.
///
/// Neynar reports errors as JSON with a `message` (sometimes `error`)
/// field; anything else is appended raw to a generic prefix.
fn upstream_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }
    if body.is_empty() {
        "Failed to fetch casts from Neynar API".to_string()
    } else {
        format!("Failed to fetch casts from Neynar API: {}", body)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Upstream response shape
// ─────────────────────────────────────────────────────────────────────────────

// Every nested field is defaulted: the upstream shape is not under our
// control and a deviation should degrade to empty values, not fail the
// whole response.

/// Feed response from Neynar.
#[derive(Debug, Clone, Deserialize)]
pub struct NeynarFeedResponse {
    #[serde(default)]
    pub casts: Vec<NeynarCast>,
}

/// A single cast as returned by Neynar.
#[derive(Debug, Clone, Deserialize)]
pub struct NeynarCast {
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub author: NeynarAuthor,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub reactions: Option<NeynarReactions>,
    #[serde(default)]
    pub embeds: Option<Vec<NeynarEmbed>>,
}

/// Cast author profile subset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NeynarAuthor {
    #[serde(default)]
    pub fid: u64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub pfp_url: String,
}

/// Reaction counters; any of them may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NeynarReactions {
    #[serde(default)]
    pub likes: Option<u64>,
    #[serde(default)]
    pub recasts: Option<u64>,
    #[serde(default)]
    pub replies: Option<u64>,
}

/// Embed entry; may reference a quoted cast.
#[derive(Debug, Clone, Deserialize)]
pub struct NeynarEmbed {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub cast_id: Option<NeynarCastId>,
}

/// Quoted-cast reference inside an embed.
#[derive(Debug, Clone, Deserialize)]
pub struct NeynarCastId {
    #[serde(default)]
    pub fid: u64,
    #[serde(default)]
    pub hash: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Normalization
// ─────────────────────────────────────────────────────────────────────────────

impl From<NeynarCast> for Post {
    /// Extract the fixed field subset the viewer renders. Unmodeled upstream
    /// fields (bios, follower counts, subscription metadata) are dropped by
    /// construction; absent engagement counters become 0; embeds and
    /// ordering pass through unchanged.
    fn from(cast: NeynarCast) -> Self {
        let reactions = cast.reactions.unwrap_or_default();
        Post {
            id: cast.hash,
            author: PostAuthor {
                subject_id: cast.author.fid,
                handle: cast.author.username,
                display_name: cast.author.display_name,
                avatar_url: cast.author.pfp_url,
            },
            text: cast.text,
            posted_at: cast.timestamp,
            engagement: Engagement {
                like_count: reactions.likes.unwrap_or(0),
                share_count: reactions.recasts.unwrap_or(0),
                reply_count: reactions.replies.unwrap_or(0),
            },
            embeds: cast
                .embeds
                .unwrap_or_default()
                .into_iter()
                .map(|e| Embed {
                    url: e.url,
                    referenced_post_ref: e.cast_id.map(|c| EmbedRef {
                        subject_id: c.fid,
                        post_id: c.hash,
                    }),
                })
                .collect(),
        }
    }
}
