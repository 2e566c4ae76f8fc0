//! Content loader - builds the content collection from the input directory

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{ContentItem, FrontMatter, MarkdownRenderer};
use crate::filters::parse_date;
use crate::Site;

/// Loads content from the input directory
pub struct ContentLoader<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        let renderer = MarkdownRenderer::with_theme(&site.config.highlight_theme);
        Self { site, renderer }
    }

    /// Load every document, oldest first
    ///
    /// Files that cannot be read are logged and skipped.
    pub fn load_all(&self) -> Result<Vec<ContentItem>> {
        let input_dir = &self.site.input_dir;
        if !input_dir.exists() {
            tracing::warn!("Input directory {:?} does not exist", input_dir);
            return Ok(Vec::new());
        }

        let reserved = self.site.config.dir.reserved();
        let mut items = Vec::new();

        for entry in WalkDir::new(input_dir)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| {
                let relative = e.path().strip_prefix(input_dir).unwrap_or(e.path());
                let first = relative
                    .components()
                    .next()
                    .and_then(|c| c.as_os_str().to_str());
                !matches!(first, Some(name) if reserved.contains(&name))
            })
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !self.is_template(path) {
                continue;
            }

            match self.load_item(path) {
                Ok(item) => {
                    tracing::debug!("Loaded {} -> {}", item.source, item.url);
                    items.push(item);
                }
                Err(e) => {
                    tracing::warn!("Failed to load {:?}: {}", path, e);
                }
            }
        }

        items.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.source.cmp(&b.source)));

        Ok(items)
    }

    /// Load a single document
    pub fn load_item(&self, path: &Path) -> Result<ContentItem> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content);

        let source = path
            .strip_prefix(&self.site.input_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        let date = match fm.date.as_deref().and_then(parse_date) {
            Some(date) => date,
            None => {
                if let Some(raw) = &fm.date {
                    tracing::warn!("Unparseable date {:?} in {}, using file time", raw, source);
                }
                file_modified(path).unwrap_or_else(Utc::now)
            }
        };

        let title = fm.title.unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string()
        });

        let rendered_html = if is_markdown_file(path) {
            self.renderer.render(body)
        } else {
            body.to_string()
        };

        let url = fm.permalink.unwrap_or_else(|| url_for_source(&source));

        Ok(ContentItem {
            title,
            date,
            tags: fm.tags,
            rendered_html,
            source,
            url,
        })
    }

    /// Whether a file's extension is one of the configured template formats
    fn is_template(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        let ext = if ext == "markdown" { "md" } else { ext };
        self.site.config.template_formats.iter().any(|f| f == ext)
    }
}

/// Output URL for a source path: `blog/hello.md` -> `/blog/hello/`,
/// `blog/index.md` -> `/blog/`
pub fn url_for_source(source: &str) -> String {
    let without_ext = match source.rfind('.') {
        Some(dot) if !source[dot..].contains('/') => &source[..dot],
        _ => source,
    };
    let path = if without_ext == "index" {
        ""
    } else {
        without_ext.strip_suffix("/index").unwrap_or(without_ext)
    };

    if path.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", path.trim_matches('/'))
    }
}

fn file_modified(path: &Path) -> Option<DateTime<Utc>> {
    fs::metadata(path)
        .ok()
        .and_then(|m| m.modified().ok())
        .map(DateTime::<Utc>::from)
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_url_for_source() {
        assert_eq!(url_for_source("index.md"), "/");
        assert_eq!(url_for_source("about.md"), "/about/");
        assert_eq!(url_for_source("posts/hello.md"), "/posts/hello/");
        assert_eq!(url_for_source("posts/index.njk"), "/posts/");
    }

    #[test]
    fn test_load_all() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        write(
            &src,
            "posts/second.md",
            "---\ntitle: Second\ndate: 2024-02-01\ntags: [posts, rust]\n---\nSecond body.\n",
        );
        write(
            &src,
            "posts/first.md",
            "---\ntitle: First\ndate: 2024-01-01\ntags: posts\n---\nFirst body.\n",
        );
        write(&src, "about.html", "---\ntitle: About\ndate: 2023-06-01\n---\n<p>Me</p>");
        write(&src, "layouts/base.njk", "{{ content }}");
        write(&src, "includes/header.njk", "<header></header>");
        write(&src, "images/logo.png", "not a template");

        let site = Site::new(dir.path(), Environment::Development).unwrap();
        let items = ContentLoader::new(&site).load_all().unwrap();

        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["About", "First", "Second"]);

        let about = &items[0];
        assert_eq!(about.rendered_html, "<p>Me</p>");
        assert_eq!(about.tags, None);
        assert_eq!(about.url, "/about/");

        let second = &items[2];
        assert_eq!(second.rendered_html, "<p>Second body.</p>\n");
        assert_eq!(second.tags(), ["posts", "rust"]);
        assert_eq!(second.source, "posts/second.md");
    }

    #[test]
    fn test_permalink_overrides_url() {
        let dir = tempfile::tempdir().unwrap();
        write(
            &dir.path().join("src"),
            "feed.md",
            "---\npermalink: /feed.xml\n---\nx",
        );

        let site = Site::new(dir.path(), Environment::Development).unwrap();
        let items = ContentLoader::new(&site).load_all().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].url, "/feed.xml");
    }

    #[test]
    fn test_missing_input_dir() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path(), Environment::Development).unwrap();
        assert!(ContentLoader::new(&site).load_all().unwrap().is_empty());
    }
}
