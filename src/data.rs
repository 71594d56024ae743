//! # Seed Data Source
//!
//! The feed ships with two embedded, read-only collections — participants
//! and posts — compiled into the binary from `data/*.json`. They are parsed
//! once at startup and treated as immutable afterwards; the store only ever
//! prepends to its own copy of the post collection.
//!
//! Loading validates what the commands later rely on: post ids must be
//! unique, since new-post id generation uses the existing maximum as a
//! monotonic floor.

use once_cell::sync::Lazy;

use crate::error::{KudozError, Result};
use crate::model::{Participant, Post, RecognitionType};

/// How many posts one feed page holds.
pub const POSTS_PER_PAGE: usize = 5;

/// Display name stamped on posts created locally. The authoring user is not
/// modeled, so every new post is authored by "you".
pub const CURRENT_USER_NAME: &str = "Você";

/// Avatar for the placeholder current user.
pub const DEFAULT_AVATAR: &str = "https://randomuser.me/api/portraits/lego/1.jpg";

/// Image used when a new post has no attachment.
pub const PLACEHOLDER_IMAGE: &str = "https://picsum.photos/1200/800?random=100";

static PARTICIPANTS_JSON: &str = include_str!("../data/participants.json");
static POSTS_JSON: &str = include_str!("../data/posts.json");

static RECOGNITION_TYPES: Lazy<Vec<RecognitionType>> = Lazy::new(|| {
    [
        ("🙏", "Obrigado!"),
        ("🙌", "Bom trabalho!"),
        ("😍", "Impressionante!"),
        ("✨", "Extraordinário!"),
    ]
    .into_iter()
    .map(|(emoji, label)| RecognitionType {
        emoji: emoji.to_string(),
        label: label.to_string(),
        value: format!("{} {}", emoji, label),
    })
    .collect()
});

/// The fixed catalog of recognition categories, in display order.
pub fn recognition_types() -> &'static [RecognitionType] {
    &RECOGNITION_TYPES
}

/// Load the embedded participant collection.
pub fn load_participants() -> Result<Vec<Participant>> {
    Ok(serde_json::from_str(PARTICIPANTS_JSON)?)
}

/// Load the embedded post collection, newest first.
pub fn load_posts() -> Result<Vec<Post>> {
    let posts: Vec<Post> = serde_json::from_str(POSTS_JSON)?;

    let mut ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    if ids.len() != posts.len() {
        return Err(KudozError::Data(
            "seed posts contain duplicate ids".to_string(),
        ));
    }

    Ok(posts)
}
