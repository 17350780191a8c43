//! Post ordering logic
//!
//! Pure functions for deriving a post's date from its published string and
//! ordering feeds newest first.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::api::Post;

/// Naive timestamp layouts the backend has been seen to emit (assumed UTC)
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a published string into a UTC instant
///
/// Accepts RFC 3339 (what the backend normally sends), RFC 2822, naive
/// date-times and plain dates. Returns `None` for anything else.
///
/// # Examples
/// ```
/// use chump::logic::posts::parse_published;
///
/// assert!(parse_published("2018-03-14T15:09:26Z").is_some());
/// assert!(parse_published("2018-03-14T15:09:26.000Z").is_some());
/// assert!(parse_published("2018-03-14").is_some());
/// assert!(parse_published("").is_none());
/// assert!(parse_published("yesterday").is_none());
/// ```
pub fn parse_published(published: &str) -> Option<DateTime<Utc>> {
    let published = published.trim();
    if published.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(published) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(published) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(published, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(published, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Fill in `parsed_date` and sort newest first
///
/// The sort is stable, so posts with equal dates keep the backend's order.
/// Posts whose date does not parse go to the end.
pub fn sort_posts(posts: &mut [Post]) {
    for post in posts.iter_mut() {
        post.parsed_date = parse_published(&post.published);
    }
    posts.sort_by(|a, b| b.parsed_date.cmp(&a.parsed_date));
}

/// Whether a list is in non-increasing parsed date order
pub fn is_newest_first(posts: &[Post]) -> bool {
    posts
        .windows(2)
        .all(|pair| pair[0].parsed_date >= pair[1].parsed_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64, published: &str) -> Post {
        Post {
            global_id: id,
            published: published.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_sort_newest_first() {
        let mut posts = vec![
            post(1, "2018-01-01T00:00:00Z"),
            post(2, "2018-03-01T00:00:00Z"),
            post(3, "2018-02-01T00:00:00Z"),
        ];
        sort_posts(&mut posts);

        let ids: Vec<i64> = posts.iter().map(|p| p.global_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert!(is_newest_first(&posts));
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let mut posts = vec![
            post(1, "2018-01-01T00:00:00Z"),
            post(2, "2018-01-01T00:00:00Z"),
            post(3, "2018-01-01T00:00:00Z"),
        ];
        sort_posts(&mut posts);

        let ids: Vec<i64> = posts.iter().map(|p| p.global_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_unparseable_dates_sort_last() {
        let mut posts = vec![
            post(1, ""),
            post(2, "2018-01-01T00:00:00Z"),
            post(3, "not a date"),
            post(4, "2019-01-01T00:00:00Z"),
        ];
        sort_posts(&mut posts);

        let ids: Vec<i64> = posts.iter().map(|p| p.global_id).collect();
        assert_eq!(ids, vec![4, 2, 1, 3]);
        assert!(is_newest_first(&posts));
    }

    #[test]
    fn test_parsed_date_is_derived_from_published() {
        let mut posts = vec![post(1, "2018-03-14T15:09:26Z")];
        sort_posts(&mut posts);
        assert_eq!(
            posts[0].parsed_date,
            parse_published("2018-03-14T15:09:26Z")
        );

        // Deriving twice gives the same answer
        let first = posts[0].parsed_date;
        sort_posts(&mut posts);
        assert_eq!(posts[0].parsed_date, first);
    }

    #[test]
    fn test_parse_naive_and_offset_forms() {
        let utc = parse_published("2018-03-14T15:09:26Z").unwrap();
        assert_eq!(parse_published("2018-03-14T15:09:26"), Some(utc));
        assert_eq!(parse_published("2018-03-14 15:09:26"), Some(utc));
        assert_eq!(parse_published("2018-03-14T16:09:26+01:00"), Some(utc));
    }

    #[test]
    fn test_empty_list_is_sorted() {
        let mut posts: Vec<Post> = Vec::new();
        sort_posts(&mut posts);
        assert!(is_newest_first(&posts));
    }
}
