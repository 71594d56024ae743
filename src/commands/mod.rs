//! # Command Layer
//!
//! The feed's business logic. Each command lives in its own submodule and
//! implements one pure state transition: it takes the current [`FeedState`]
//! (plus its payload) and returns the next one. No command performs I/O,
//! touches globals, or mutates in place — the store swaps the whole state
//! on every dispatch so observers can diff cheaply.
//!
//! ## Actions
//!
//! [`FeedAction`] is the tagged union of everything the view layer can ask
//! for, with one handler per variant:
//!
//! - [`set_filter`]: merge a partial filter, jump back to page 1
//! - [`load_more`]: extend the visible window by one page
//! - [`add_post`]: build and prepend a post from a submission draft
//! - [`reset`]: restore the first-page view without touching the filter
//!
//! ## Derivation Rule
//!
//! Every handler funnels through [`recompute`], which is the single place
//! the derived fields (`displayed_posts`, `has_more_posts`) are produced.
//! Handlers decide *what* changes (posts, filter, page); `recompute`
//! guarantees the derived window is consistent with it.
//!
//! ## Testing Strategy
//!
//! This is where the lion's share of testing lives: each submodule tests
//! its transition against hand-built states, and edge cases (empty
//! collections, saturated pages, rejected drafts) are covered here rather
//! than at the store level.

use crate::feed::FeedState;
use crate::filter::filter_posts;
use crate::model::{Filter, FilterUpdate, NewPostDraft, Post};

pub mod add_post;
pub mod load_more;
pub mod reset;
pub mod set_filter;

/// Everything the view layer can ask the feed store to do.
#[derive(Debug, Clone)]
pub enum FeedAction {
    SetFilter(FilterUpdate),
    LoadMorePosts,
    AddNewPost(NewPostDraft),
    ResetPosts,
}

/// Dispatch one action against the current state.
pub fn reduce(state: &FeedState, action: FeedAction) -> FeedState {
    match action {
        FeedAction::SetFilter(update) => set_filter::run(state, update),
        FeedAction::LoadMorePosts => load_more::run(state),
        FeedAction::AddNewPost(draft) => add_post::run(state, draft),
        FeedAction::ResetPosts => reset::run(state),
    }
}

/// Build a fully consistent state from its independent parts.
///
/// The visible window is the filtered set truncated to
/// `current_page * posts_per_page` entries; the slice saturates at the
/// filtered length, so out-of-range pages degrade to "everything visible,
/// nothing more to load".
pub(crate) fn recompute(
    posts: Vec<Post>,
    filter: Filter,
    current_page: usize,
    posts_per_page: usize,
) -> FeedState {
    let filtered = filter_posts(&posts, &filter);
    let visible = filtered.len().min(current_page * posts_per_page);
    let has_more_posts = filtered.len() > visible;

    let mut displayed_posts = filtered;
    displayed_posts.truncate(visible);

    FeedState {
        posts,
        filter,
        displayed_posts,
        current_page,
        posts_per_page,
        has_more_posts,
    }
}
