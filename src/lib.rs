// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Top Casts: backend and viewer for a Farcaster top-casts mini app.
//!
//! This crate provides the API server that proxies a user's popular casts
//! from Neynar, serves the mini-app manifest and swap token descriptors,
//! and a terminal feed viewer that consumes the proxy.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;
pub mod viewer;

use config::Config;
use services::NeynarClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub neynar: NeynarClient,
}
