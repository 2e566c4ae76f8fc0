//! Site configuration (site.yml)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::SiteResult;
use crate::filters::DEFAULT_EXCERPT_LENGTH;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub url: String,
    pub language: String,

    // Filters
    pub excerpt_length: usize,
    pub highlight_theme: String,

    // Directory
    pub dir: DirConfig,

    /// Files copied verbatim into the output, source path -> output path
    pub passthrough: IndexMap<String, String>,

    pub template_formats: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let mut passthrough = IndexMap::new();
        passthrough.insert("src/images".to_string(), "images".to_string());

        Self {
            title: "Blog".to_string(),
            url: "http://example.com".to_string(),
            language: "en".to_string(),

            excerpt_length: DEFAULT_EXCERPT_LENGTH,
            highlight_theme: "base16-ocean.dark".to_string(),

            dir: DirConfig::default(),
            passthrough,

            template_formats: vec!["html".to_string(), "njk".to_string(), "md".to_string()],
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> SiteResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded site config from {:?}", path.as_ref());
        Ok(config)
    }
}

/// Input and output directory layout
///
/// `includes`, `data` and `layouts` are relative to `input`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DirConfig {
    pub input: String,
    pub output: String,
    pub includes: String,
    pub data: String,
    pub layouts: String,
}

impl Default for DirConfig {
    fn default() -> Self {
        Self {
            input: "src".to_string(),
            output: "public".to_string(),
            includes: "includes".to_string(),
            data: "data".to_string(),
            layouts: "layouts".to_string(),
        }
    }
}

impl DirConfig {
    /// Directories under the input dir that never hold content
    pub fn reserved(&self) -> [&str; 3] {
        [&self.includes, &self.data, &self.layouts]
    }
}
