//! Fixture builders shared by unit and integration tests.
//!
//! Compiled for this crate's own tests and, behind the `test_utils`
//! feature, for downstream clients that want realistic feed data without
//! hand-writing posts.

use chrono::{DateTime, Duration, Utc};

use crate::data;
use crate::model::{NewPostDraft, Participant, Post, RecognitionType};

const NAMES: &[&str] = &[
    "Ana Souza",
    "Bruno Lima",
    "Carla Mendes",
    "Diego Santos",
    "Fernanda Alves",
    "Gustavo Pereira",
];

fn base_date() -> DateTime<Utc> {
    "2025-08-20T12:00:00Z".parse().expect("valid fixture date")
}

/// One post with the given identity fields and sensible defaults
/// everywhere else.
pub fn seed_post(id: i64, author: &str, recipient: &str, kind: &str) -> Post {
    let emoji = kind.split_whitespace().next().unwrap_or("🙌").to_string();
    Post {
        id,
        author_name: author.to_string(),
        author_avatar: format!("https://example.test/avatars/{}.jpg", author.len()),
        recipient_name: recipient.to_string(),
        recipient_avatar: format!("https://example.test/avatars/{}.jpg", recipient.len()),
        kind: kind.to_string(),
        emoji,
        date: base_date() - Duration::days(id.max(0)),
        text: format!("Reconhecimento #{} para {}", id, recipient),
        image: format!("https://picsum.photos/1200/800?random={}", id),
        hashtags: Vec::new(),
    }
}

/// `count` posts, newest first, cycling authors, recipients, and the
/// recognition-type catalog.
pub fn seed_posts(count: usize) -> Vec<Post> {
    let types = data::recognition_types();
    (0..count)
        .map(|i| {
            let id = (count - i) as i64;
            let author = NAMES[i % NAMES.len()];
            let recipient = NAMES[(i + 1) % NAMES.len()];
            let kind = &types[i % types.len()].value;
            let mut post = seed_post(id, author, recipient, kind);
            post.date = base_date() - Duration::days(i as i64);
            post
        })
        .collect()
}

/// A draft that passes the add-post validation gate: Bruno Lima receives a
/// 🙏 Obrigado! with a short message and no attachment.
pub fn valid_draft() -> NewPostDraft {
    NewPostDraft {
        recipient: Some(Participant {
            id: 2,
            name: "Bruno Lima".to_string(),
            avatar: "https://randomuser.me/api/portraits/men/32.jpg".to_string(),
        }),
        recognition_type: Some(RecognitionType {
            emoji: "🙏".to_string(),
            label: "Obrigado!".to_string(),
            value: "🙏 Obrigado!".to_string(),
        }),
        message: "Valeu pela força no release!".to_string(),
        image: None,
        hashtags: vec!["parceria".to_string()],
    }
}
