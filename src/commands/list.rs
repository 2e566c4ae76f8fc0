//! List site content

use anyhow::Result;
use std::io::Write;

use crate::collections::{by_tag, tag_counts, tag_url};
use crate::filters::RESERVED_TAGS;
use crate::Site;

/// Collection holding blog posts
const POSTS_TAG: &str = "posts";

/// List site content by type, writing one entry per line to `out`
pub fn run<W: Write>(site: &Site, content_type: &str, out: &mut W) -> Result<()> {
    match content_type {
        "tag" | "tags" => {
            let items = site.load_content()?;
            let counts = tag_counts(&items, &RESERVED_TAGS);
            writeln!(out, "Tags ({}):", counts.len())?;
            for (tag, count) in counts {
                writeln!(out, "  {} ({}) {}", tag, count, tag_url(&tag))?;
            }
        }
        "post" | "posts" => {
            let items = site.load_content()?;
            let filters = site.filters()?;
            let posts = by_tag(&items, POSTS_TAG);
            writeln!(out, "Posts ({}):", posts.len())?;
            for post in posts {
                writeln!(
                    out,
                    "  {} - {} [{}] ({})",
                    filters.readable_date(&post.date, None),
                    post.title,
                    filters.page_tags(post.tags()).join(", "),
                    filters.reading_time(&post.rendered_html)
                )?;
                writeln!(out, "    {}", filters.excerpt(&post.rendered_html))?;
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }

    Ok(())
}
