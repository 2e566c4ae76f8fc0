//! URL and date helpers for feeds

use chrono::{DateTime, Utc};

use crate::content::ContentItem;

/// Join a site-relative path onto the site URL; absolute URLs pass through
///
/// # Examples
/// ```
/// use leafkit::filters::absolute_url;
/// assert_eq!(absolute_url("/posts/a/", "https://example.com/"), "https://example.com/posts/a/");
/// ```
pub fn absolute_url(path: &str, base: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Date of the most recent item, for a feed's `updated` field
pub fn newest_item_date(items: &[ContentItem]) -> Option<DateTime<Utc>> {
    items.iter().map(|item| item.date).max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_newest_item_date() {
        let old = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let new = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let items = vec![
            ContentItem::new("a.md", "").with_date(new),
            ContentItem::new("b.md", "").with_date(old),
        ];
        assert_eq!(newest_item_date(&items), Some(new));
        assert_eq!(newest_item_date(&[]), None);
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(
            absolute_url("posts/a/", "https://example.com"),
            "https://example.com/posts/a/"
        );
        assert_eq!(absolute_url("/", "https://example.com/"), "https://example.com/");
        assert_eq!(
            absolute_url("https://cdn.test/x.js", "https://example.com"),
            "https://cdn.test/x.js"
        );
    }
}
