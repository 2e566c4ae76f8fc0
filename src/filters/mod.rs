//! Template filters
//!
//! These are the functions the template layer calls while rendering a page:
//! excerpts, tag lists, dates and a few array and URL helpers.

mod array;
mod date;
mod excerpt;
mod html;
mod reading_time;
mod tags;
mod url;

use chrono::{DateTime, TimeZone};

pub use array::*;
pub use date::*;
pub use excerpt::*;
pub use html::*;
pub use reading_time::*;
pub use tags::*;
pub use url::*;

use crate::assets::AssetManifest;
use crate::config::SiteConfig;
use crate::error::SiteResult;

/// All filters bound to one site's configuration and asset manifest
pub struct Filters {
    config: SiteConfig,
    manifest: AssetManifest,
}

impl Filters {
    /// Create a new filters instance
    pub fn new(config: SiteConfig, manifest: AssetManifest) -> Self {
        Self { config, manifest }
    }

    /// Excerpt using the configured length
    pub fn excerpt(&self, html: &str) -> String {
        excerpt(html, self.config.excerpt_length)
    }

    /// Excerpt with an explicit length
    pub fn excerpt_with_length(&self, html: &str, max_length: usize) -> String {
        excerpt(html, max_length)
    }

    /// Tags to list on a page, reserved tags removed
    pub fn page_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<String> {
        page_tags(tags, &RESERVED_TAGS)
    }

    /// Medium date; defaults to the site language
    pub fn readable_date<Tz: TimeZone>(
        &self,
        date: &DateTime<Tz>,
        language: Option<&str>,
    ) -> String {
        readable_date(date, language.unwrap_or(&self.config.language))
    }

    pub fn html_date_string<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> String {
        html_date_string(date)
    }

    pub fn date_to_iso(&self, s: &str) -> SiteResult<String> {
        date_to_iso(s)
    }

    pub fn reading_time(&self, html: &str) -> String {
        reading_time(html)
    }

    /// Absolute URL against the configured site URL
    pub fn absolute_url(&self, path: &str) -> String {
        absolute_url(path, &self.config.url)
    }

    /// `bundledcss` shortcode
    pub fn bundled_css(&self) -> String {
        self.manifest.bundled_css()
    }

    /// `bundledjs` shortcode
    pub fn bundled_js(&self) -> String {
        self.manifest.bundled_js()
    }
}
