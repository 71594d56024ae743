//! The feed filter predicate.
//!
//! Pure and order-preserving: the result is always a subsequence of the
//! input. Empty filter fields are wildcards, so the default filter is the
//! identity.

use crate::model::{Filter, Post};

/// Return the posts matching `filter`, in their original order.
///
/// A post matches when the search term (case-insensitive) occurs in its
/// author or recipient name, and the recognition type — when set — equals
/// the post's type exactly.
pub fn filter_posts(posts: &[Post], filter: &Filter) -> Vec<Post> {
    let term = filter.search_term.to_lowercase();
    posts
        .iter()
        .filter(|post| matches_search(post, &term) && matches_type(post, filter))
        .cloned()
        .collect()
}

fn matches_search(post: &Post, term_lower: &str) -> bool {
    term_lower.is_empty()
        || post.author_name.to_lowercase().contains(term_lower)
        || post.recipient_name.to_lowercase().contains(term_lower)
}

fn matches_type(post: &Post, filter: &Filter) -> bool {
    filter.recognition_type.is_empty() || post.kind == filter.recognition_type
}
