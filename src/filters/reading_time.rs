//! Estimated reading time

use super::html::strip_tags;

const WORDS_PER_MINUTE: usize = 235;

/// Reading time for rendered HTML, like `3 min`; never less than one minute
pub fn reading_time(html: &str) -> String {
    let words = strip_tags(html).split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min", minutes)
}
