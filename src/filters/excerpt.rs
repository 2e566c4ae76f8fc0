//! Plain-text excerpts from rendered HTML

use super::html::strip_tags;

/// Excerpt length used when the caller does not pass one
pub const DEFAULT_EXCERPT_LENGTH: usize = 200;

const PARAGRAPH_END: &str = "</p>";
const ELLIPSIS: &str = " ...";

/// Build a plain-text preview of `html` no longer than `max_length` characters
///
/// When the first paragraph closes before `max_length`, that paragraph is
/// returned as-is (tags stripped). Otherwise the whole document is stripped
/// and cut at the last whitespace at or before `max_length`, followed by
/// `" ..."`. Text without any whitespace in range is returned whole if it
/// fits, and hard-cut at `max_length` if it doesn't.
///
/// All offsets count characters, not bytes.
///
/// # Examples
/// ```
/// use leafkit::filters::excerpt;
/// assert_eq!(excerpt("<p>Hello world</p><p>More</p>", 200), "Hello world");
/// assert_eq!(excerpt("one two three", 8), "one two ...");
/// ```
pub fn excerpt(html: &str, max_length: usize) -> String {
    if let Some(end) = html.find(PARAGRAPH_END) {
        let para_len = html[..end].chars().count();
        if para_len > 0 && para_len < max_length {
            return strip_tags(&html[..end]);
        }
    }

    let text = strip_tags(html);
    match last_whitespace_at_or_before(&text, max_length) {
        Some(cut) => format!("{}{}", &text[..cut], ELLIPSIS),
        None if text.chars().count() <= max_length => text,
        None => {
            let cut = byte_offset(&text, max_length);
            format!("{}{}", &text[..cut], ELLIPSIS)
        }
    }
}

/// Byte index of the last whitespace char whose char offset is <= `max_chars`
fn last_whitespace_at_or_before(text: &str, max_chars: usize) -> Option<usize> {
    text.char_indices()
        .take(max_chars.saturating_add(1))
        .filter(|(_, c)| c.is_whitespace())
        .map(|(i, _)| i)
        .last()
}

fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
