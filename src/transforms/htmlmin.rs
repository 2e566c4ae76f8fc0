//! HTML minification for production output

use minify_html::{minify, Cfg};

/// Settings for page output: comments dropped, closing tags and the
/// `<html>`/`<head>` openers kept.
fn page_config() -> Cfg {
    Cfg {
        keep_comments: false,
        keep_closing_tags: true,
        keep_html_and_head_opening_tags: true,
        ..Cfg::default()
    }
}

/// Minify an HTML document
///
/// Removes comments and collapses insignificant whitespace. Attribute values
/// and the content of `pre`, `textarea`, `script` and `style` are preserved.
pub fn minify_html(html: &str) -> String {
    let minified = minify(html.as_bytes(), &page_config());
    String::from_utf8_lossy(&minified).into_owned()
}
