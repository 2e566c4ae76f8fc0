//! Collections derived from the whole content collection
//!
//! Everything here is recomputed from scratch on each build and takes the
//! collection as an explicit argument.

use indexmap::IndexSet;
use std::collections::HashMap;

use crate::content::ContentItem;
use crate::filters::is_denied;

/// Set of tags used for site navigation
///
/// Iteration follows first appearance, but callers should treat it as an
/// unordered set.
pub type TagSet = IndexSet<String>;

/// Deduplicated tag vocabulary of a collection, without denylisted tags
///
/// Untagged items are skipped.
pub fn tag_list(items: &[ContentItem], denylist: &[&str]) -> TagSet {
    let mut tag_set = TagSet::new();

    for item in items {
        let Some(tags) = &item.tags else {
            continue;
        };
        for tag in tags {
            if !is_denied(tag, denylist) {
                tag_set.insert(tag.clone());
            }
        }
    }

    tag_set
}

/// Number of items per tag, most used first, then alphabetical
///
/// A tag repeated within one item counts once for that item.
pub fn tag_counts(items: &[ContentItem], denylist: &[&str]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for item in items {
        let unique: IndexSet<&str> = item
            .tags()
            .iter()
            .map(String::as_str)
            .filter(|tag| !is_denied(tag, denylist))
            .collect();
        for tag in unique {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }

    let mut counts: Vec<_> = counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Items carrying `tag`, in collection order
pub fn by_tag<'a>(items: &'a [ContentItem], tag: &str) -> Vec<&'a ContentItem> {
    items.iter().filter(|item| item.has_tag(tag)).collect()
}

/// URL-safe form of a tag for tag page paths
pub fn tag_slug(tag: &str) -> String {
    slug::slugify(tag)
}

/// Path of a tag's listing page
pub fn tag_url(tag: &str) -> String {
    format!("/tags/{}/", tag_slug(tag))
}
