//! End-to-end walks over the public FeedStore API, using the embedded seed
//! feed the way a client session would.

use kudoz::data::{self, POSTS_PER_PAGE};
use kudoz::feed::FeedStore;
use kudoz::image::{validate_image_file, ImageFile};
use kudoz::model::{FilterUpdate, NewPostDraft};
use kudoz::text::extract_hashtags;

fn store() -> FeedStore {
    FeedStore::from_seed().expect("seed data loads")
}

#[test]
fn first_load_shows_one_page_of_the_seed_feed() {
    let store = store();
    let state = store.state();
    assert_eq!(state.posts.len(), 12);
    assert_eq!(state.displayed_posts.len(), POSTS_PER_PAGE);
    assert!(state.has_more_posts);
    assert_eq!(state.current_page, 1);
}

#[test]
fn paging_through_the_whole_feed() {
    let mut store = store();

    store.load_more_posts();
    assert_eq!(store.state().displayed_posts.len(), 10);
    assert!(store.state().has_more_posts);

    store.load_more_posts();
    assert_eq!(store.state().displayed_posts.len(), 12);
    assert!(!store.state().has_more_posts);

    // Past the end the content is stable even though the page advances.
    store.load_more_posts();
    assert_eq!(store.state().displayed_posts.len(), 12);
    assert_eq!(store.state().current_page, 4);
}

#[test]
fn filtering_by_type_then_clearing() {
    let mut store = store();

    store.set_filter(FilterUpdate::recognition_type("🙏 Obrigado!"));
    assert_eq!(store.state().displayed_posts.len(), 2);
    assert!(!store.state().has_more_posts);
    assert!(store
        .state()
        .displayed_posts
        .iter()
        .all(|p| p.kind == "🙏 Obrigado!"));

    store.set_filter(FilterUpdate::recognition_type(""));
    assert_eq!(store.state().displayed_posts.len(), POSTS_PER_PAGE);
    assert!(store.state().has_more_posts);
}

#[test]
fn searching_resets_pagination() {
    let mut store = store();
    store.load_more_posts();
    assert_eq!(store.state().current_page, 2);

    store.set_filter(FilterUpdate::search("ana"));
    assert_eq!(store.state().current_page, 1);
    assert!(store.state().displayed_posts.iter().all(|p| {
        p.author_name.to_lowercase().contains("ana")
            || p.recipient_name.to_lowercase().contains("ana")
    }));
}

#[test]
fn submitting_a_recognition_end_to_end() {
    let mut store = store();
    let participants = data::load_participants().expect("participants load");
    let recipient = participants[0].clone();
    let types = data::recognition_types();

    let message = "Mandou muito no workshop, #didatica impecável!";
    let attachment = ImageFile::new("slide.png", "image/png", vec![0u8; 64 * 1024]);
    assert!(validate_image_file(&attachment).is_valid);

    store.add_new_post(NewPostDraft {
        recipient: Some(recipient.clone()),
        recognition_type: Some(types[1].clone()),
        message: message.to_string(),
        image: Some(attachment),
        hashtags: extract_hashtags(message),
    });

    let state = store.state();
    assert_eq!(state.posts.len(), 13);
    let post = &state.posts[0];
    assert_eq!(post.author_name, data::CURRENT_USER_NAME);
    assert_eq!(post.recipient_name, recipient.name);
    assert_eq!(post.kind, types[1].value);
    assert_eq!(post.hashtags, vec!["didatica"]);
    assert!(post.image.starts_with("blob:"));

    // The new post matches the empty filter, so it heads the first page.
    assert_eq!(state.displayed_posts[0].id, post.id);
    assert_eq!(state.displayed_posts.len(), POSTS_PER_PAGE);
}

#[test]
fn incomplete_draft_changes_nothing_visible() {
    let mut store = store();
    let before = store.state().clone();

    store.add_new_post(NewPostDraft {
        recipient: None,
        recognition_type: None,
        message: "sem destinatário".to_string(),
        image: None,
        hashtags: Vec::new(),
    });

    assert_eq!(store.state(), &before);
}

#[test]
fn reset_restores_the_first_page_view() {
    let mut store = store();
    store.load_more_posts();
    store.load_more_posts();

    store.reset_posts();
    assert_eq!(store.state().current_page, 1);
    assert_eq!(store.state().displayed_posts.len(), POSTS_PER_PAGE);
    assert!(store.state().has_more_posts);
}
