//! Per-page tag filtering

/// Structural tags that never appear in tag listings
pub const RESERVED_TAGS: [&str; 5] = ["all", "nav", "post", "posts", "memes"];

/// Whether `tag` is listed in `denylist`
pub fn is_denied(tag: &str, denylist: &[&str]) -> bool {
    denylist.contains(&tag)
}

/// Tags to show on a single page, in their original order
///
/// Every entry is read as a comma-separated list, so a front-matter value of
/// `"rust,web"` contributes two tags. Empty segments and denylisted tags are
/// dropped.
pub fn page_tags<S: AsRef<str>>(tags: &[S], denylist: &[&str]) -> Vec<String> {
    tags.iter()
        .flat_map(|entry| entry.as_ref().split(','))
        .filter(|tag| !tag.is_empty() && !is_denied(tag, denylist))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_tags_preserves_order() {
        assert_eq!(page_tags(&["a", "nav", "b"], &RESERVED_TAGS), vec!["a", "b"]);
        assert_eq!(
            page_tags(&["zeta", "posts", "alpha", "memes", "mid"], &RESERVED_TAGS),
            vec!["zeta", "alpha", "mid"]
        );
    }

    #[test]
    fn test_page_tags_all_reserved() {
        assert!(page_tags(&RESERVED_TAGS, &RESERVED_TAGS).is_empty());
    }

    #[test]
    fn test_page_tags_splits_commas() {
        assert_eq!(page_tags(&["rust,post,web"], &RESERVED_TAGS), vec!["rust", "web"]);
        assert_eq!(page_tags(&["a,,b"], &RESERVED_TAGS), vec!["a", "b"]);
    }

    #[test]
    fn test_page_tags_custom_denylist() {
        let tags = vec!["draft".to_string(), "post".to_string()];
        assert_eq!(page_tags(&tags, &["draft"]), vec!["post"]);
    }
}
