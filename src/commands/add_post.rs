use chrono::Utc;

use crate::commands::recompute;
use crate::data::{CURRENT_USER_NAME, DEFAULT_AVATAR, PLACEHOLDER_IMAGE};
use crate::feed::FeedState;
use crate::image::object_url;
use crate::model::{NewPostDraft, Post};

/// Build a post from a submission draft and prepend it to the feed.
///
/// A draft without a recipient or a recognition type is silently dropped —
/// the form owns pre-submit validation and its own user feedback, so this
/// is a validation gate, not an error path.
///
/// The window is recomputed against the *current* page under the current
/// filter: the new post shows up only if it matches the active filter, and
/// the reader doesn't get yanked back to page 1.
pub fn run(state: &FeedState, draft: NewPostDraft) -> FeedState {
    let (Some(recipient), Some(recognition_type)) = (draft.recipient, draft.recognition_type)
    else {
        return state.clone();
    };

    let image = match &draft.image {
        Some(file) => object_url(file),
        None => PLACEHOLDER_IMAGE.to_string(),
    };

    let post = Post {
        id: next_post_id(&state.posts),
        author_name: CURRENT_USER_NAME.to_string(),
        author_avatar: DEFAULT_AVATAR.to_string(),
        recipient_name: recipient.name,
        recipient_avatar: recipient.avatar,
        kind: recognition_type.value,
        emoji: recognition_type.emoji,
        date: Utc::now(),
        text: draft.message,
        image,
        hashtags: draft.hashtags,
    };

    let mut posts = Vec::with_capacity(state.posts.len() + 1);
    posts.push(post);
    posts.extend(state.posts.iter().cloned());

    recompute(
        posts,
        state.filter.clone(),
        state.current_page,
        state.posts_per_page,
    )
}

/// Millisecond timestamp with a monotonic floor above every existing id, so
/// rapid successive submissions can't collide.
fn next_post_id(posts: &[Post]) -> i64 {
    let now = Utc::now().timestamp_millis();
    let floor = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
    now.max(floor)
}
