//! Hashtag extraction for the submission form.

use once_cell::sync::Lazy;
use regex::Regex;

/// `#` followed by ASCII word characters. Matches the message syntax the
/// form renders, so no Unicode word classes here.
static HASHTAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#([0-9A-Za-z_]+)").expect("invalid hashtag regex"));

/// Extract hashtag tokens from a message, `#` stripped, in order of first
/// appearance. Duplicates are retained; the caller decides whether they
/// matter.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    HASHTAG_RE
        .captures_iter(text)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect()
}
