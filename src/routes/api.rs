// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes: the top-posts feed proxy and the swap token list.

use crate::error::{AppError, Result};
use crate::models::{swap_tokens, Post, Token, TopPostsResponse};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// API routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/top-posts", get(get_top_posts))
        .route("/api/tokens", get(get_tokens))
}

// ─── Top Posts ───────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TopPostsQuery {
    /// FID whose popular casts are listed
    subject_id: Option<String>,
    /// FID of the viewing user, defaults to the subject
    viewer_id: Option<String>,
}

/// Parse a query parameter that must be a positive integer FID.
fn parse_fid(name: &str, raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|fid| *fid > 0)
        .ok_or_else(|| {
            AppError::BadRequest(format!("'{}' must be a positive integer", name))
        })
}

/// Proxy a user's popular casts from Neynar.
///
/// Validates the query before anything else: a bad request never causes an
/// upstream call. The upstream ordering (pre-sorted by popularity) is
/// preserved as-is.
async fn get_top_posts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TopPostsQuery>,
) -> Result<Json<TopPostsResponse>> {
    let subject_raw = query
        .subject_id
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("'subjectId' parameter is required".to_string()))?;
    let subject_id = parse_fid("subjectId", subject_raw)?;

    let viewer_id = match query.viewer_id.as_deref() {
        Some(raw) => parse_fid("viewerId", raw)?,
        None => subject_id,
    };

    let upstream = state.neynar.popular_casts(subject_id, viewer_id).await?;

    let casts: Vec<Post> = upstream.into_iter().map(Post::from).collect();
    tracing::debug!(fid = subject_id, count = casts.len(), "Fetched top casts");

    Ok(Json(TopPostsResponse { casts }))
}

// ─── Swap Tokens ─────────────────────────────────────────────

/// Fixed descriptor set the swap widget is mounted with.
async fn get_tokens() -> Json<&'static [Token]> {
    Json(swap_tokens())
}
