// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Bucketed relative-time label for feed display.
///
/// Under an hour reads "Just now", under a day "Nh ago", under a week
/// "Nd ago", anything older a calendar date.
pub fn format_relative(posted_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - posted_at).num_hours();

    if hours < 1 {
        return "Just now".to_string();
    }
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    let days = hours / 24;
    if days < 7 {
        return format!("{}d ago", days);
    }
    posted_at.format("%b %-d, %Y").to_string()
}
