// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! FID resolution for the feed viewer.
//!
//! The host runtime injects a session-context object whose exact shape is
//! not contractually guaranteed and has shifted between client revisions.
//! Resolution walks a small ordered list of known paths and takes the first
//! positive numeric match - a best-effort compatibility shim, not a
//! contract. The matched path is logged so shape drift shows up in logs.

use serde_json::Value;

/// Demo FID offered as an explicit user choice.
///
/// Never substituted automatically: a failed resolution must stay visible
/// as "no identity", not get masked by the demo account.
pub const DEMO_FID: u64 = 123456;

/// Ordered session-context paths that may carry the viewer's FID.
const FID_LOOKUP_PATHS: &[&str] = &["user.fid", "viewer.fid", "client.fid"];

/// A FID resolved from the session context, with the path that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedFid {
    pub fid: u64,
    pub path: &'static str,
}

/// Resolve a FID from an injected session-context object.
///
/// Tries each lookup path in order and stops at the first field holding a
/// positive integer. Returns `None` when nothing matches; the context is
/// never mutated.
pub fn resolve_fid(context: &Value) -> Option<ResolvedFid> {
    for path in FID_LOOKUP_PATHS {
        if let Some(fid) = lookup_numeric(context, path) {
            tracing::debug!(path, fid, "Resolved FID from session context");
            return Some(ResolvedFid { fid, path });
        }
    }
    tracing::debug!("No FID found in session context");
    None
}

/// Follow a dotted path into nested JSON and read a positive integer.
fn lookup_numeric(value: &Value, path: &str) -> Option<u64> {
    let mut current = value;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    current.as_u64().filter(|fid| *fid > 0)
}

/// Parse a manually entered FID. Accepts only a strictly positive integer.
pub fn parse_manual_fid(input: &str) -> Option<u64> {
    input.trim().parse::<u64>().ok().filter(|fid| *fid > 0)
}
