//! # Kudoz Architecture
//!
//! Kudoz is a **UI-agnostic recognition-feed library**. It owns the data and
//! state of a "kudos" feed — who recognized whom, for what, and which slice
//! of that feed is currently visible — and nothing else. Rendering, forms,
//! toasts, and routing belong to whatever client sits on top.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View layer (not in this crate)                             │
//! │  - Renders displayed_posts, search box, submission form     │
//! │  - Invokes store commands, re-renders from the new state    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (feed.rs)                                            │
//! │  - Owned, injected FeedStore instance, no globals           │
//! │  - Replaces its FeedState wholesale on every dispatch       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command layer (commands/*.rs)                              │
//! │  - One pure handler per action, no I/O assumptions          │
//! │  - Takes a FeedState, returns the next FeedState            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (model.rs, filter.rs, data.rs)                      │
//! │  - Post / Participant / Filter types                        │
//! │  - The filter predicate and the embedded seed collections   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Derived State Is Never Set
//!
//! `displayed_posts` and `has_more_posts` are pure functions of
//! `(posts, filter, current_page)`. Commands recompute them on every
//! transition; nothing in the crate assigns them independently. If a state
//! ever violates that, it's a bug in a command handler, not a data issue.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests of every
//!    transition and edge case. This is where the lion's share lives.
//! 2. **Utilities** (`text`, `image`, `time`): small focused tests next to
//!    the code.
//! 3. **Store** (`tests/feed_flow.rs`): end-to-end walks over the seed data
//!    through the public `FeedStore` API.
//!
//! ## Module Overview
//!
//! - [`feed`]: `FeedState` and the owned `FeedStore` facade
//! - [`commands`]: One pure reducer per feed action
//! - [`filter`]: The post-matching predicate
//! - [`model`]: Core data types (`Post`, `Participant`, `Filter`, drafts)
//! - [`data`]: Embedded seed collections and feed constants
//! - [`text`]: Hashtag extraction for the submission form
//! - [`image`]: Attachment validation and session-local object URLs
//! - [`time`]: Compact relative timestamps for rendering
//! - [`error`]: Error types

pub mod commands;
pub mod data;
pub mod error;
pub mod feed;
pub mod filter;
pub mod image;
pub mod model;
pub mod text;
pub mod time;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
