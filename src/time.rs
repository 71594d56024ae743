//! Compact relative timestamps for feed rendering.

use chrono::{DateTime, Utc};

/// Format how long ago `date` was, relative to `now`, in the compact pt-BR
/// style the feed cards use: "agora", "5min", "3h", "2d", then a short
/// date once the post is a week old. `now` is injected so rendering and
/// tests are deterministic.
pub fn format_relative_time(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - date).num_minutes();
    if minutes < 1 {
        return "agora".to_string();
    }
    if minutes < 60 {
        return format!("{}min", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }

    let days = hours / 24;
    if days < 7 {
        return format!("{}d", days);
    }

    date.format("%d/%m/%Y").to_string()
}
