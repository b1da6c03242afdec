// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::extract::RawQuery;
use axum::http::StatusCode;
use axum::{routing::get, Router};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use topcasts::config::Config;
use topcasts::routes::create_router;
use topcasts::services::NeynarClient;
use topcasts::AppState;

/// Handle to a stub Neynar upstream running on an ephemeral port.
#[allow(dead_code)]
pub struct StubUpstream {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<String>>>,
}

#[allow(dead_code)]
impl StubUpstream {
    /// Number of requests the upstream has received.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Raw query string of the most recent request.
    pub fn last_query(&self) -> Option<String> {
        self.last_query.lock().unwrap().clone()
    }
}

/// Spawn a stub upstream that answers the popular-casts endpoint with a
/// fixed status and body, counting every hit.
#[allow(dead_code)]
pub async fn spawn_upstream(status: StatusCode, body: &str) -> StubUpstream {
    let hits = Arc::new(AtomicUsize::new(0));
    let last_query = Arc::new(Mutex::new(None));
    let body = body.to_string();

    let handler = {
        let hits = hits.clone();
        let last_query = last_query.clone();
        move |RawQuery(query): RawQuery| {
            let hits = hits.clone();
            let last_query = last_query.clone();
            let body = body.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                *last_query.lock().unwrap() = query;
                (status, body)
            }
        }
    };

    let app = Router::new().route("/v2/farcaster/cast/user/popular", get(handler));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub upstream");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubUpstream {
        base_url: format!("http://{}", addr),
        hits,
        last_query,
    }
}

/// Create a test app wired to the given upstream base URL.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(upstream_base: &str, api_key: Option<&str>) -> (Router, Arc<AppState>) {
    let config = Config {
        neynar_base_url: upstream_base.to_string(),
        neynar_api_key: api_key.map(str::to_string),
        ..Config::default()
    };

    let neynar = NeynarClient::new(
        config.neynar_base_url.clone(),
        config.neynar_api_key.clone(),
    );

    let state = Arc::new(AppState { config, neynar });
    (create_router(state.clone()), state)
}

/// Serve a router on an ephemeral local port, returning its base URL.
#[allow(dead_code)]
pub async fn spawn_app(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test app");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Collect a response body as parsed JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body was not valid JSON")
}

/// A three-cast upstream feed in Neynar's shape: full engagement, partial
/// engagement, and no engagement at all.
#[allow(dead_code)]
pub fn sample_upstream_feed() -> String {
    serde_json::json!({
        "casts": [
            {
                "hash": "0xaaa",
                "author": {
                    "fid": 6730,
                    "username": "alice",
                    "display_name": "Alice",
                    "pfp_url": "https://example.com/alice.png"
                },
                "text": "first by popularity",
                "timestamp": "2026-08-01T12:00:00Z",
                "reactions": { "likes": 42, "recasts": 7, "replies": 3 },
                "embeds": [
                    { "url": "https://example.com/a", "cast_id": { "fid": 99, "hash": "0xquoted" } }
                ]
            },
            {
                "hash": "0xbbb",
                "author": {
                    "fid": 6730,
                    "username": "alice",
                    "display_name": "Alice",
                    "pfp_url": "https://example.com/alice.png"
                },
                "text": "second",
                "timestamp": "2026-08-02T12:00:00Z",
                "reactions": { "likes": 5 }
            },
            {
                "hash": "0xccc",
                "author": {
                    "fid": 6730,
                    "username": "alice",
                    "display_name": "Alice",
                    "pfp_url": "https://example.com/alice.png"
                },
                "text": "third",
                "timestamp": "2026-08-03T12:00:00Z"
            }
        ]
    })
    .to_string()
}
