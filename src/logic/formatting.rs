//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use chrono::{DateTime, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::Post;

/// Format a post's publish time for card headers
///
/// Falls back to the raw published string when it never parsed.
pub fn format_published(post: &Post) -> String {
    match post.parsed_date {
        Some(date) => format_date(date),
        None => post.published.clone(),
    }
}

pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M").to_string()
}

/// Counter with a singular/plural noun
///
/// # Examples
/// ```
/// use chump::logic::formatting::format_count;
///
/// assert_eq!(format_count(0, "like", "likes"), "0 likes");
/// assert_eq!(format_count(1, "like", "likes"), "1 like");
/// assert_eq!(format_count(12, "share", "shares"), "12 shares");
/// ```
pub fn format_count(count: i64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Cut a string to at most `max_width` terminal columns, adding an ellipsis
/// when something was removed
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Mask a password field for display
pub fn mask(secret: &str) -> String {
    "•".repeat(secret.chars().count())
}
