use crate::commands::recompute;
use crate::feed::FeedState;

/// Extend the visible window by one page.
///
/// The page counter advances unconditionally, even when the window is
/// already saturated; the slice saturates at the filtered length, so the
/// visible content never changes past the end. Clients gate the "load
/// more" control on `has_more_posts`, not on this command failing.
pub fn run(state: &FeedState) -> FeedState {
    recompute(
        state.posts.clone(),
        state.filter.clone(),
        state.current_page + 1,
        state.posts_per_page,
    )
}
