// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The Farcaster mini-app manifest served at `/.well-known/farcaster.json`.
//!
//! Pure substitution from config values. Empty strings and empty lists are
//! filtered out so the manifest only advertises what is actually set.

use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

/// Manifest route.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/.well-known/farcaster.json", get(get_manifest))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    account_association: Option<AccountAssociation>,
    frame: Frame,
}

/// Signed proof binding the mini app to its domain.
#[derive(Serialize)]
struct AccountAssociation {
    header: String,
    payload: String,
    signature: String,
}

fn skip_str(value: &str) -> bool {
    value.is_empty()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Frame {
    version: &'static str,
    name: String,
    #[serde(skip_serializing_if = "skip_str")]
    subtitle: String,
    #[serde(skip_serializing_if = "skip_str")]
    description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    screenshot_urls: Vec<String>,
    icon_url: String,
    splash_image_url: String,
    splash_background_color: &'static str,
    home_url: String,
    webhook_url: String,
    primary_category: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<&'static str>,
    hero_image_url: String,
    #[serde(skip_serializing_if = "skip_str")]
    tagline: String,
    og_title: String,
    og_description: String,
    og_image_url: String,
}

async fn get_manifest(State(state): State<Arc<AppState>>) -> Json<Manifest> {
    let config = &state.config;
    let url = &config.public_url;
    let description = "Swap ETH, USDC, and WETH tokens using your connected wallet".to_string();

    // Only advertise the association when the full signed triple is present.
    let account_association = match (
        &config.account_association_header,
        &config.account_association_payload,
        &config.account_association_signature,
    ) {
        (Some(header), Some(payload), Some(signature)) => Some(AccountAssociation {
            header: header.clone(),
            payload: payload.clone(),
            signature: signature.clone(),
        }),
        _ => None,
    };

    Json(Manifest {
        account_association,
        frame: Frame {
            version: "1",
            name: config.app_name.clone(),
            subtitle: "Swap tokens on Base".to_string(),
            description: description.clone(),
            screenshot_urls: Vec::new(),
            icon_url: format!("{}/app-icon.svg", url),
            splash_image_url: format!("{}/app-hero.svg", url),
            splash_background_color: "#667eea",
            home_url: url.clone(),
            webhook_url: config.webhook_url(),
            primary_category: "DeFi",
            tags: vec!["swap", "tokens", "base", "defi"],
            hero_image_url: format!("{}/app-hero.svg", url),
            tagline: "Simple token swapping on Base".to_string(),
            og_title: config.app_name.clone(),
            og_description: description,
            og_image_url: format!("{}/app-hero.svg", url),
        },
    })
}
