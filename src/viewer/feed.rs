// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Feed viewer state machine.
//!
//! Owns the resolved identity and the fetch lifecycle:
//! `Idle -> Loading -> Loaded | Failed`. One fetch in flight at a time;
//! the loading check that disables the refresh control is the only
//! concurrency guard, matching the UI contract.

use crate::models::Post;
use crate::viewer::client::FeedClient;
use crate::viewer::identity::{self, DEMO_FID};
use serde_json::Value;

/// Fetch lifecycle of the feed.
#[derive(Debug, Clone)]
pub enum FeedPhase {
    /// No fetch attempted yet (and possibly no identity resolved).
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Last fetch succeeded. May be empty.
    Loaded(Vec<Post>),
    /// Last fetch failed; the message is displayed verbatim, no auto retry.
    Failed(String),
}

/// Drives identity resolution, fetching, and state for the cast feed.
pub struct FeedViewer {
    client: FeedClient,
    fid: Option<u64>,
    phase: FeedPhase,
}

impl FeedViewer {
    pub fn new(client: FeedClient) -> Self {
        Self {
            client,
            fid: None,
            phase: FeedPhase::Idle,
        }
    }

    /// The resolved subject FID, if any.
    pub fn fid(&self) -> Option<u64> {
        self.fid
    }

    pub fn phase(&self) -> &FeedPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FeedPhase::Loading)
    }

    /// Whether the refresh control should be enabled.
    pub fn can_refresh(&self) -> bool {
        self.fid.is_some() && !self.is_loading()
    }

    /// Resolve identity from an injected session context and, on success,
    /// trigger the initial fetch.
    ///
    /// Evaluated once: a previously resolved identity is never overwritten
    /// by a later context. An unresolvable context leaves the viewer `Idle`
    /// with no fetch issued - the demo identity is NOT substituted.
    pub async fn attach_session_context(&mut self, context: &Value) {
        if self.fid.is_some() {
            return;
        }
        if let Some(resolved) = identity::resolve_fid(context) {
            self.fid = Some(resolved.fid);
            self.refresh().await;
        }
    }

    /// Accept a manually entered FID. Returns false (and changes nothing)
    /// if the input is not a positive integer; otherwise resolves the
    /// identity and triggers a fetch.
    pub async fn submit_manual_fid(&mut self, input: &str) -> bool {
        match identity::parse_manual_fid(input) {
            Some(fid) => {
                self.fid = Some(fid);
                self.refresh().await;
                true
            }
            None => false,
        }
    }

    /// Explicit user choice to browse the demo account.
    pub async fn use_demo(&mut self) {
        self.fid = Some(DEMO_FID);
        self.refresh().await;
    }

    /// Fetch (or re-fetch) the feed for the resolved identity.
    ///
    /// No-op without an identity or while a fetch is in flight. Failures
    /// land in `Failed` with a displayable message; nothing is retried.
    pub async fn refresh(&mut self) {
        let Some(fid) = self.fid else {
            return;
        };
        if self.is_loading() {
            return;
        }

        self.phase = FeedPhase::Loading;
        match self.client.top_posts(fid, None).await {
            Ok(posts) => {
                tracing::debug!(fid, count = posts.len(), "Feed loaded");
                self.phase = FeedPhase::Loaded(posts);
            }
            Err(err) => {
                tracing::warn!(fid, error = %err, "Feed fetch failed");
                self.phase = FeedPhase::Failed(err.to_string());
            }
        }
    }
}
