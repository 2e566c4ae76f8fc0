//! Print the excerpt of a single document

use anyhow::{Context, Result};
use std::path::Path;

use crate::content::loader::ContentLoader;
use crate::filters::excerpt;
use crate::Site;

/// Excerpt of the document at `path`, at most `length` characters
/// (the configured length when `None`)
pub fn run(site: &Site, path: &Path, length: Option<usize>) -> Result<String> {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        site.base_dir.join(path)
    };

    let item = ContentLoader::new(site)
        .load_item(&path)
        .with_context(|| format!("Failed to load {:?}", path))?;

    Ok(excerpt(
        &item.rendered_html,
        length.unwrap_or(site.config.excerpt_length),
    ))
}
