//! Apply output transforms to files already in the output directory

use anyhow::Result;
use std::fs;
use walkdir::WalkDir;

use crate::Site;

/// Run the output transforms over every file under the output directory
///
/// Returns the number of files rewritten.
pub fn run(site: &Site) -> Result<usize> {
    let transforms = site.transforms();
    if !site.output_dir.exists() {
        tracing::warn!("Output directory {:?} does not exist", site.output_dir);
        return Ok(0);
    }

    let mut rewritten = 0;
    for entry in WalkDir::new(&site.output_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if !transforms.minifies(Some(path)) {
            continue;
        }

        let content = fs::read_to_string(path)?;
        let output = transforms.apply(&content, Some(path));
        if output != content {
            fs::write(path, output.as_bytes())?;
            rewritten += 1;
            tracing::debug!("Minified {:?}", path);
        }
    }

    tracing::info!("Transformed {} file(s) for {}", rewritten, site.env);
    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    const PAGE: &str = "<html>\n  <body>\n    <p>Hi</p>\n  </body>\n</html>\n";

    fn site_with_page(env: Environment) -> (tempfile::TempDir, Site) {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path(), env).unwrap();
        fs::create_dir_all(site.output_dir.join("posts")).unwrap();
        fs::write(site.output_dir.join("posts/index.html"), PAGE).unwrap();
        fs::write(site.output_dir.join("feed.xml"), "<feed>\n</feed>").unwrap();
        (dir, site)
    }

    #[test]
    fn test_production_minifies_html_only() {
        let (_dir, site) = site_with_page(Environment::Production);
        assert_eq!(run(&site).unwrap(), 1);
        let page = fs::read_to_string(site.output_dir.join("posts/index.html")).unwrap();
        assert!(page.len() < PAGE.len());
        assert!(!page.contains("<p>Hi</p>\n"));
        assert!(page.contains("<p>Hi</p>"));
        assert_eq!(
            fs::read_to_string(site.output_dir.join("feed.xml")).unwrap(),
            "<feed>\n</feed>"
        );
    }

    #[test]
    fn test_development_leaves_files() {
        let (_dir, site) = site_with_page(Environment::Development);
        assert_eq!(run(&site).unwrap(), 0);
        assert_eq!(
            fs::read_to_string(site.output_dir.join("posts/index.html")).unwrap(),
            PAGE
        );
    }
}
