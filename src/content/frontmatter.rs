//! Front-matter parsing

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Deserialize `tags` from a single scalar or a list of scalars
///
/// `null` and non-scalar values count as no tags.
fn optional_string_or_vec<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Option<Vec<String>>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(vec![value.to_string()]))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(vec![value]))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(vec![value.to_string()]))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(vec![value.to_string()]))
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<serde_yaml::Value>()? {
                match item {
                    serde_yaml::Value::String(s) => vec.push(s),
                    serde_yaml::Value::Number(n) => vec.push(n.to_string()),
                    serde_yaml::Value::Bool(b) => vec.push(b.to_string()),
                    _ => {}
                }
            }
            Ok(Some(vec))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Front-matter data from a document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    #[serde(deserialize_with = "optional_string_or_vec", default)]
    pub tags: Option<Vec<String>>,
    pub permalink: Option<String>,
    pub layout: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// Content without a closing fence, or whose YAML fails to parse, is
    /// returned whole with default front matter.
    pub fn parse(content: &str) -> (Self, &str) {
        let Some(rest) = content.trim_start().strip_prefix("---") else {
            return (FrontMatter::default(), content);
        };
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            return (FrontMatter::default(), content);
        };
        let yaml_content = &rest[..end_pos];
        let remaining = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return (FrontMatter::default(), remaining);
        }

        match serde_yaml::from_str::<FrontMatter>(yaml_content) {
            Ok(fm) => (fm, remaining),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse YAML front-matter, treating as content: {}",
                    e
                );
                (FrontMatter::default(), content)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
date: 2024-01-15 10:30:00
tags:
  - posts
  - rust
---

This is the content.
"#;

        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.title, Some("Hello World".to_string()));
        assert_eq!(fm.date, Some("2024-01-15 10:30:00".to_string()));
        assert_eq!(fm.tags, Some(vec!["posts".to_string(), "rust".to_string()]));
        assert_eq!(remaining.trim(), "This is the content.");
    }

    #[test]
    fn test_single_string_tag() {
        let (fm, _) = FrontMatter::parse("---\ntags: notes\n---\nBody");
        assert_eq!(fm.tags, Some(vec!["notes".to_string()]));
    }

    #[test]
    fn test_missing_and_null_tags_are_absent() {
        let (fm, _) = FrontMatter::parse("---\ntitle: A\n---\nBody");
        assert_eq!(fm.tags, None);

        let (fm, _) = FrontMatter::parse("---\ntitle: A\ntags:\n---\nBody");
        assert_eq!(fm.tags, None);
    }

    #[test]
    fn test_scalar_list_items_become_strings() {
        let (fm, _) = FrontMatter::parse("---\ntags: [2024, rust, {a: 1}]\n---\nBody");
        assert_eq!(fm.tags, Some(vec!["2024".to_string(), "rust".to_string()]));
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just markdown\n";
        let (fm, remaining) = FrontMatter::parse(content);
        assert!(fm.title.is_none());
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_unclosed_frontmatter_is_content() {
        let content = "---\ntitle: Oops\nno closing fence";
        let (fm, remaining) = FrontMatter::parse(content);
        assert!(fm.title.is_none());
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_invalid_yaml_is_content() {
        let content = "---\ntitle: [unclosed\n---\nBody";
        let (fm, remaining) = FrontMatter::parse(content);
        assert!(fm.title.is_none());
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_extra_fields() {
        let (fm, _) = FrontMatter::parse("---\ntitle: A\nauthor: Kim\n---\n");
        assert_eq!(
            fm.extra.get("author"),
            Some(&serde_yaml::Value::String("Kim".to_string()))
        );
    }
}
