use crate::commands::recompute;
use crate::feed::FeedState;
use crate::model::FilterUpdate;

/// Merge a partial filter update and jump back to the first page.
///
/// Absent fields keep their current value, so the search box and the type
/// dropdown can dispatch independently. Accepts anything, including an
/// empty update (which still resets the page).
pub fn run(state: &FeedState, update: FilterUpdate) -> FeedState {
    let filter = state.filter.merged(update);
    recompute(state.posts.clone(), filter, 1, state.posts_per_page)
}
