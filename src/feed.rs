//! # Feed Store
//!
//! [`FeedStore`] is the single source of truth for the visible post window.
//! It is an **owned, injected instance**: the client composes one at
//! startup and passes it (or a handle to it) down its view tree. There is
//! no global — commands take `&mut self`, so Rust's ownership rules are the
//! "fail loudly outside the owning scope" guarantee, enforced at compile
//! time instead of at runtime.
//!
//! Every dispatch replaces the whole [`FeedState`] and bumps a generation
//! counter, so an observer can skip re-rendering by comparing generations
//! instead of diffing collections.

use serde::Serialize;

use crate::commands::{self, FeedAction};
use crate::data::{self, POSTS_PER_PAGE};
use crate::error::Result;
use crate::model::{Filter, FilterUpdate, NewPostDraft, Post};

/// The complete feed state.
///
/// `posts`, `filter`, and `current_page` are the independent parts;
/// `displayed_posts` and `has_more_posts` are derived from them by the
/// command layer and are never set on their own.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedState {
    /// Source of truth, newest first.
    pub posts: Vec<Post>,
    pub filter: Filter,
    /// The filtered prefix currently visible.
    pub displayed_posts: Vec<Post>,
    pub current_page: usize,
    pub posts_per_page: usize,
    pub has_more_posts: bool,
}

impl FeedState {
    /// Initial state over a post collection: default filter, first page.
    pub fn new(posts: Vec<Post>) -> Self {
        Self::with_page_size(posts, POSTS_PER_PAGE)
    }

    /// Like [`FeedState::new`] with an explicit page size.
    pub fn with_page_size(posts: Vec<Post>, posts_per_page: usize) -> Self {
        commands::recompute(posts, Filter::default(), 1, posts_per_page)
    }
}

/// The command interface the view layer drives.
pub struct FeedStore {
    state: FeedState,
    generation: u64,
}

impl FeedStore {
    /// Store over an explicit post collection (newest first).
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            state: FeedState::new(posts),
            generation: 0,
        }
    }

    /// Store over the embedded seed collection.
    pub fn from_seed() -> Result<Self> {
        Ok(Self::new(data::load_posts()?))
    }

    /// Read access to the current state.
    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// Monotonic counter, bumped once per dispatch. Two equal generations
    /// mean the observer already saw this exact state.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Run one action through the reducer and swap in the resulting state.
    pub fn dispatch(&mut self, action: FeedAction) {
        self.state = commands::reduce(&self.state, action);
        self.generation += 1;
    }

    pub fn set_filter(&mut self, update: FilterUpdate) {
        self.dispatch(FeedAction::SetFilter(update));
    }

    pub fn load_more_posts(&mut self) {
        self.dispatch(FeedAction::LoadMorePosts);
    }

    pub fn add_new_post(&mut self, draft: NewPostDraft) {
        self.dispatch(FeedAction::AddNewPost(draft));
    }

    pub fn reset_posts(&mut self) {
        self.dispatch(FeedAction::ResetPosts);
    }
}
