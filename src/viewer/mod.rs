// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Feed viewer: identity resolution, fetch state machine, and rendering.
//!
//! The library half of the terminal client in `src/bin/viewer.rs`. Split
//! from the server modules so the display rules can be tested without a
//! running proxy.

pub mod client;
pub mod feed;
pub mod identity;
pub mod render;

pub use client::{FeedClient, FeedError};
pub use feed::{FeedPhase, FeedViewer};
pub use identity::DEMO_FID;
