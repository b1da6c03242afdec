// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod cast;
pub mod token;

pub use cast::{Embed, EmbedRef, Engagement, Post, PostAuthor, TopPostsResponse};
pub use token::{swap_tokens, Token};
