//! Tag stripping and escaping shared by the text filters

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_RE: Regex = Regex::new(r"(?i)<[^>]+>").unwrap();
}

/// Remove every `<...>` tag from a string, keeping the text between them
///
/// # Examples
/// ```
/// use leafkit::filters::strip_tags;
/// assert_eq!(strip_tags("<p>Hello <b>World</b></p>"), "Hello World");
/// ```
pub fn strip_tags(s: &str) -> String {
    TAG_RE.replace_all(s, "").into_owned()
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<p>Hello <b>World</b></p>"), "Hello World");
        assert_eq!(strip_tags(r#"<A HREF="/x">link</A>"#), "link");
        assert_eq!(strip_tags("no tags"), "no tags");
    }

    #[test]
    fn test_empty_brackets_are_kept() {
        // `<>` has nothing inside it and is not a tag
        assert_eq!(strip_tags("a <> b"), "a <> b");
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }
}
