// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Terminal rendering for the feed viewer.
//!
//! Pure string building with no I/O so every display rule is unit-testable.
//! Truncation and relative-time labels are display-only derivations; the
//! underlying `Post` is never modified.

use crate::models::Post;
use crate::time_utils::format_relative;
use crate::viewer::feed::{FeedPhase, FeedViewer};
use crate::viewer::identity::DEMO_FID;
use chrono::{DateTime, Utc};

/// Display length cap for cast bodies.
pub const TEXT_PREVIEW_LEN: usize = 150;

const ELLIPSIS: &str = "...";

/// Truncate text for display, appending an ellipsis when capped.
///
/// Counts characters, not bytes, so multi-byte text never splits mid-char.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Relative-time label for a cast timestamp.
///
/// An unparseable timestamp degrades to the raw string rather than failing
/// the render.
pub fn render_timestamp(posted_at: &str, now: DateTime<Utc>) -> String {
    match DateTime::parse_from_rfc3339(posted_at) {
        Ok(parsed) => format_relative(parsed.with_timezone(&Utc), now),
        Err(_) => posted_at.to_string(),
    }
}

/// Render a single cast with its 1-based rank.
pub fn render_post(rank: usize, post: &Post, now: DateTime<Utc>) -> String {
    let author = if post.author.display_name.is_empty() {
        &post.author.handle
    } else {
        &post.author.display_name
    };

    format!(
        "#{rank} {author} (@{handle}) - {when}\n   {text}\n   {likes} likes, {recasts} recasts, {replies} replies",
        handle = post.author.handle,
        when = render_timestamp(&post.posted_at, now),
        text = truncate_text(&post.text, TEXT_PREVIEW_LEN),
        likes = post.engagement.like_count,
        recasts = post.engagement.share_count,
        replies = post.engagement.reply_count,
    )
}

/// Render the viewer's current state to a displayable block.
pub fn render_feed(viewer: &FeedViewer, now: DateTime<Utc>) -> String {
    if viewer.fid().is_none() {
        return format!(
            "Enter a Farcaster ID (FID) to view their top casts.\n\
             Type a FID, or 'demo' to try the demo account (FID {}).",
            DEMO_FID
        );
    }

    match viewer.phase() {
        FeedPhase::Idle => "Press refresh to load casts.".to_string(),
        FeedPhase::Loading => "Loading casts...".to_string(),
        FeedPhase::Failed(message) => format!("Error: {}", message),
        FeedPhase::Loaded(posts) if posts.is_empty() => {
            "No casts found. Refresh to try again.".to_string()
        }
        FeedPhase::Loaded(posts) => {
            let mut out = format!("Top casts for FID {}\n", viewer.fid().unwrap_or_default());
            for (index, post) in posts.iter().enumerate() {
                out.push('\n');
                out.push_str(&render_post(index + 1, post, now));
                out.push('\n');
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Engagement, PostAuthor};

    fn sample_post(text: &str) -> Post {
        Post {
            id: "0xabc".to_string(),
            author: PostAuthor {
                subject_id: 6730,
                handle: "alice".to_string(),
                display_name: "Alice".to_string(),
                avatar_url: String::new(),
            },
            text: text.to_string(),
            posted_at: "2026-08-07T07:00:00Z".to_string(),
            engagement: Engagement {
                like_count: 10,
                share_count: 2,
                reply_count: 1,
            },
            embeds: Vec::new(),
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-08-07T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_truncation_is_display_only() {
        let long_text = "x".repeat(200);
        let post = sample_post(&long_text);

        let shown = truncate_text(&post.text, TEXT_PREVIEW_LEN);
        assert_eq!(shown.chars().count(), TEXT_PREVIEW_LEN + ELLIPSIS.len());
        assert!(shown.ends_with(ELLIPSIS));
        assert_eq!(&shown[..TEXT_PREVIEW_LEN], &long_text[..TEXT_PREVIEW_LEN]);

        // The post itself still carries the full text for any re-render.
        assert_eq!(post.text.len(), 200);
    }

    #[test]
    fn test_truncation_short_text_untouched() {
        assert_eq!(truncate_text("gm", TEXT_PREVIEW_LEN), "gm");
        let exactly = "y".repeat(TEXT_PREVIEW_LEN);
        assert_eq!(truncate_text(&exactly, TEXT_PREVIEW_LEN), exactly);
    }

    #[test]
    fn test_truncation_multibyte_safe() {
        let emoji = "🦀".repeat(160);
        let shown = truncate_text(&emoji, TEXT_PREVIEW_LEN);
        assert_eq!(shown.chars().count(), TEXT_PREVIEW_LEN + ELLIPSIS.len());
    }

    #[test]
    fn test_render_post_lines() {
        let rendered = render_post(1, &sample_post("gm"), now());
        assert!(rendered.starts_with("#1 Alice (@alice) - 5h ago"));
        assert!(rendered.contains("   gm"));
        assert!(rendered.contains("10 likes, 2 recasts, 1 replies"));
    }

    #[test]
    fn test_render_post_falls_back_to_handle() {
        let mut post = sample_post("gm");
        post.author.display_name = String::new();
        let rendered = render_post(3, &post, now());
        assert!(rendered.starts_with("#3 alice (@alice)"));
    }

    #[test]
    fn test_unparseable_timestamp_degrades_to_raw() {
        assert_eq!(render_timestamp("not-a-date", now()), "not-a-date");
    }
}
