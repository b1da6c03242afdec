// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Terminal feed viewer.
//!
//! Connects to a running Top Casts API server and renders the ranked cast
//! feed. Identity comes from, in order: a host-injected session-context
//! file, an explicit `--fid`, an explicit `--demo`, or interactive entry.
//!
//! ```text
//! viewer [--url http://127.0.0.1:3000] [--context ctx.json] [--fid N] [--demo]
//! ```

use chrono::Utc;
use std::io::{self, BufRead, Write};
use topcasts::viewer::{render, FeedClient, FeedViewer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("warn".parse().unwrap()),
        )
        .init();

    let mut base_url =
        std::env::var("TOPCASTS_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());
    let mut context_file: Option<String> = None;
    let mut fid_arg: Option<String> = None;
    let mut demo = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--url" => base_url = args.next().ok_or_else(|| usage("--url needs a value"))?,
            "--context" => {
                context_file = Some(args.next().ok_or_else(|| usage("--context needs a value"))?)
            }
            "--fid" => fid_arg = Some(args.next().ok_or_else(|| usage("--fid needs a value"))?),
            "--demo" => demo = true,
            other => return Err(usage(&format!("unknown argument: {}", other))),
        }
    }

    let mut viewer = FeedViewer::new(FeedClient::new(base_url));

    // Identity resolution order: session context, then manual flag, then
    // the explicit demo choice. Demo is never an automatic fallback.
    if let Some(path) = context_file {
        let raw = std::fs::read_to_string(&path)?;
        let context: serde_json::Value = serde_json::from_str(&raw)?;
        viewer.attach_session_context(&context).await;
    }
    if viewer.fid().is_none() {
        if let Some(raw) = fid_arg {
            if !viewer.submit_manual_fid(&raw).await {
                return Err(usage("--fid must be a positive integer"));
            }
        } else if demo {
            viewer.use_demo().await;
        }
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    // Interactive identity entry when nothing resolved one.
    if viewer.fid().is_none() {
        println!("{}", render::render_feed(&viewer, Utc::now()));
        print!("fid> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let input = line?;
        let input = input.trim();
        if input.is_empty() {
            return Ok(());
        }
        if input.eq_ignore_ascii_case("demo") {
            viewer.use_demo().await;
        } else if !viewer.submit_manual_fid(input).await {
            println!("Not a valid FID: {}", input);
            return Ok(());
        }
    }

    loop {
        println!("{}", render::render_feed(&viewer, Utc::now()));
        if !viewer.can_refresh() {
            break;
        }
        print!("[r]efresh / [q]uit> ");
        io::stdout().flush()?;
        match lines.next() {
            Some(Ok(line)) if line.trim().eq_ignore_ascii_case("r") => viewer.refresh().await,
            _ => break,
        }
    }

    Ok(())
}

fn usage(message: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "{}\nusage: viewer [--url URL] [--context FILE] [--fid N] [--demo]",
        message
    )
}
