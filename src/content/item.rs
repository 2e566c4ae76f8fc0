//! A single rendered document

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One document of the content collection
///
/// `tags` is `None` when the front matter has no `tags` field at all,
/// which is distinct from an empty list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContentItem {
    /// Document title
    pub title: String,

    /// Publication date (UTC)
    pub date: DateTime<Utc>,

    /// Tags from front matter
    pub tags: Option<Vec<String>>,

    /// HTML produced by the renderer
    pub rendered_html: String,

    /// Source file path, relative to the input directory
    pub source: String,

    /// Output URL path
    pub url: String,
}

impl ContentItem {
    /// Create an untagged item from its source path and rendered HTML
    pub fn new(source: impl Into<String>, rendered_html: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            rendered_html: rendered_html.into(),
            ..Default::default()
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Tags as a slice, empty when absent
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }
}
