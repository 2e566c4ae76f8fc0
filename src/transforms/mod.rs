//! Output transforms applied to rendered files before they are written

mod htmlmin;

use std::borrow::Cow;
use std::path::Path;

pub use htmlmin::minify_html;

use crate::config::Environment;

/// Post-render transforms for one build environment
#[derive(Debug, Clone, Copy)]
pub struct Transforms {
    env: Environment,
}

impl Transforms {
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// Whether output written to `output_path` gets minified
    pub fn minifies(&self, output_path: Option<&Path>) -> bool {
        self.env.is_production()
            && output_path
                .and_then(|p| p.extension())
                .map(|ext| ext == "html")
                .unwrap_or(false)
    }

    /// Transform rendered content on its way to `output_path`
    ///
    /// Pages without an output path (not written to disk) pass through.
    pub fn apply<'a>(&self, content: &'a str, output_path: Option<&Path>) -> Cow<'a, str> {
        if self.minifies(output_path) {
            Cow::Owned(minify_html(content))
        } else {
            Cow::Borrowed(content)
        }
    }
}
