// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Normalized cast model returned by the feed proxy.

use serde::{Deserialize, Serialize};

/// A single normalized cast.
///
/// Built fresh on every proxy invocation from the upstream response and
/// never cached or mutated afterwards. `text` always holds the full body;
/// display truncation happens in the viewer only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Opaque upstream cast hash, unique within a response
    pub id: String,
    /// Author profile fields the viewer renders
    pub author: PostAuthor,
    /// Full cast body
    pub text: String,
    /// ISO 8601 timestamp, kept as a string
    pub posted_at: String,
    /// Engagement counters, always present after normalization
    pub engagement: Engagement,
    /// Embeds, passed through from upstream in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
}

/// Author of a cast.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    /// Farcaster ID of the author
    pub subject_id: u64,
    /// Username (handle without the leading @)
    pub handle: String,
    /// Display name (may be empty, viewer falls back to handle)
    pub display_name: String,
    /// Profile picture URL
    pub avatar_url: String,
}

/// Engagement counters. Absent upstream values normalize to 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Engagement {
    pub like_count: u64,
    pub share_count: u64,
    pub reply_count: u64,
}

/// An embedded URL, optionally referencing another cast.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Embed {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referenced_post_ref: Option<EmbedRef>,
}

/// Reference to a quoted cast inside an embed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedRef {
    pub subject_id: u64,
    pub post_id: String,
}

/// Response body of `GET /api/top-posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopPostsResponse {
    pub casts: Vec<Post>,
}
