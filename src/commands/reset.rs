use crate::commands::recompute;
use crate::feed::FeedState;

/// Restore the first-page view without touching the filter.
pub fn run(state: &FeedState) -> FeedState {
    recompute(
        state.posts.clone(),
        state.filter.clone(),
        1,
        state.posts_per_page,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{load_more, set_filter};
    use crate::model::FilterUpdate;
    use crate::test_utils::seed_posts;

    #[test]
    fn returns_to_the_first_page() {
        let mut state = FeedState::with_page_size(seed_posts(12), 5);
        state = load_more::run(&state);
        state = load_more::run(&state);
        assert_eq!(state.displayed_posts.len(), 12);

        let next = run(&state);
        assert_eq!(next.current_page, 1);
        assert_eq!(next.displayed_posts.len(), 5);
        assert!(next.has_more_posts);
    }

    #[test]
    fn keeps_the_active_filter() {
        let state = FeedState::with_page_size(seed_posts(12), 5);
        let state = set_filter::run(&state, FilterUpdate::search("ana"));
        let state = load_more::run(&state);

        let next = run(&state);
        assert_eq!(next.filter.search_term, "ana");
        assert!(next
            .displayed_posts
            .iter()
            .all(|p| p.author_name.to_lowercase().contains("ana")
                || p.recipient_name.to_lowercase().contains("ana")));
    }
}
