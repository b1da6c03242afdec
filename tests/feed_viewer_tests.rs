// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end tests for the feed viewer against a live proxy + stub upstream.

use axum::http::StatusCode;
use chrono::Utc;
use serde_json::json;
use topcasts::viewer::{render, FeedClient, FeedPhase, FeedViewer};

mod common;

async fn spawn_proxy(upstream_base: &str, api_key: Option<&str>) -> String {
    let (app, _) = common::create_test_app(upstream_base, api_key);
    common::spawn_app(app).await
}

#[tokio::test]
async fn test_session_context_resolves_and_loads_feed() {
    let upstream = common::spawn_upstream(StatusCode::OK, &common::sample_upstream_feed()).await;
    let proxy = spawn_proxy(&upstream.base_url, Some("test-key")).await;

    let mut viewer = FeedViewer::new(FeedClient::new(proxy));
    let context = json!({ "user": { "fid": 6730, "username": "alice" } });
    viewer.attach_session_context(&context).await;

    assert_eq!(viewer.fid(), Some(6730));
    let FeedPhase::Loaded(posts) = viewer.phase() else {
        panic!("expected Loaded, got {:?}", viewer.phase());
    };
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0].id, "0xaaa");
    assert_eq!(upstream.hits(), 1);

    // Rendered feed shows 1-based ranks in array order.
    let rendered = render::render_feed(&viewer, Utc::now());
    let first = rendered.find("#1 ").unwrap();
    let second = rendered.find("#2 ").unwrap();
    let third = rendered.find("#3 ").unwrap();
    assert!(first < second && second < third);
}

#[tokio::test]
async fn test_no_identity_means_no_fetch() {
    let upstream = common::spawn_upstream(StatusCode::OK, &common::sample_upstream_feed()).await;
    let proxy = spawn_proxy(&upstream.base_url, Some("test-key")).await;

    let mut viewer = FeedViewer::new(FeedClient::new(proxy));
    viewer.attach_session_context(&json!({ "theme": "dark" })).await;

    assert_eq!(viewer.fid(), None);
    assert!(matches!(viewer.phase(), FeedPhase::Idle));
    assert!(!viewer.can_refresh());
    assert_eq!(upstream.hits(), 0);

    // The render is the identity-selection affordance, never blank.
    let rendered = render::render_feed(&viewer, Utc::now());
    assert!(rendered.contains("FID"));
    assert!(rendered.contains("demo"));
}

#[tokio::test]
async fn test_context_is_resolved_once() {
    let upstream = common::spawn_upstream(StatusCode::OK, &common::sample_upstream_feed()).await;
    let proxy = spawn_proxy(&upstream.base_url, Some("test-key")).await;

    let mut viewer = FeedViewer::new(FeedClient::new(proxy));
    viewer
        .attach_session_context(&json!({ "user": { "fid": 10 } }))
        .await;
    viewer
        .attach_session_context(&json!({ "user": { "fid": 20 } }))
        .await;

    assert_eq!(viewer.fid(), Some(10));
    assert_eq!(upstream.hits(), 1);
}

#[tokio::test]
async fn test_manual_entry_and_refresh() {
    let upstream = common::spawn_upstream(StatusCode::OK, &common::sample_upstream_feed()).await;
    let proxy = spawn_proxy(&upstream.base_url, Some("test-key")).await;

    let mut viewer = FeedViewer::new(FeedClient::new(proxy));

    assert!(!viewer.submit_manual_fid("not a number").await);
    assert_eq!(viewer.fid(), None);
    assert_eq!(upstream.hits(), 0);

    assert!(viewer.submit_manual_fid("6730").await);
    assert_eq!(viewer.fid(), Some(6730));
    assert_eq!(upstream.hits(), 1);

    // Refresh re-runs the same fetch with the same identity.
    viewer.refresh().await;
    assert_eq!(upstream.hits(), 2);
    assert!(matches!(viewer.phase(), FeedPhase::Loaded(_)));
}

#[tokio::test]
async fn test_demo_is_an_explicit_choice() {
    let upstream = common::spawn_upstream(StatusCode::OK, &common::sample_upstream_feed()).await;
    let proxy = spawn_proxy(&upstream.base_url, Some("test-key")).await;

    let mut viewer = FeedViewer::new(FeedClient::new(proxy));
    viewer.use_demo().await;

    assert_eq!(viewer.fid(), Some(topcasts::viewer::DEMO_FID));
    let query = upstream.last_query().unwrap();
    assert!(query.contains(&format!("fid={}", topcasts::viewer::DEMO_FID)));
}

#[tokio::test]
async fn test_fetch_failure_becomes_displayed_error() {
    let upstream = common::spawn_upstream(
        StatusCode::TOO_MANY_REQUESTS,
        r#"{"message":"rate limit exceeded"}"#,
    )
    .await;
    let proxy = spawn_proxy(&upstream.base_url, Some("test-key")).await;

    let mut viewer = FeedViewer::new(FeedClient::new(proxy));
    viewer.submit_manual_fid("6730").await;

    let FeedPhase::Failed(message) = viewer.phase() else {
        panic!("expected Failed, got {:?}", viewer.phase());
    };
    assert_eq!(message, "rate limit exceeded");

    // Displayed verbatim, no automatic retry.
    let rendered = render::render_feed(&viewer, Utc::now());
    assert!(rendered.contains("Error: rate limit exceeded"));
    assert_eq!(upstream.hits(), 1);
}

#[tokio::test]
async fn test_unreachable_proxy_is_a_displayed_error() {
    // Nothing listens here; the connection fails outright.
    let mut viewer = FeedViewer::new(FeedClient::new("http://127.0.0.1:9"));
    viewer.submit_manual_fid("6730").await;

    assert!(matches!(viewer.phase(), FeedPhase::Failed(_)));
}

#[tokio::test]
async fn test_empty_feed_renders_no_casts_affordance() {
    let upstream = common::spawn_upstream(StatusCode::OK, r#"{"casts":[]}"#).await;
    let proxy = spawn_proxy(&upstream.base_url, Some("test-key")).await;

    let mut viewer = FeedViewer::new(FeedClient::new(proxy));
    viewer.submit_manual_fid("6730").await;

    let FeedPhase::Loaded(posts) = viewer.phase() else {
        panic!("expected Loaded, got {:?}", viewer.phase());
    };
    assert!(posts.is_empty());

    let rendered = render::render_feed(&viewer, Utc::now());
    assert!(rendered.contains("No casts found"));
}
