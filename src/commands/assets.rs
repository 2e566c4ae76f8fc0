//! Print the bundled asset tags

use anyhow::Result;

use crate::Site;

/// The `bundledcss` and `bundledjs` shortcode output for this build
pub fn run(site: &Site) -> Result<(String, String)> {
    let filters = site.filters()?;
    Ok((filters.bundled_css(), filters.bundled_js()))
}
