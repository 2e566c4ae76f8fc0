//! Passthrough copy of static files

use anyhow::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::Site;

/// Copy every configured passthrough source into the output directory
///
/// Sources are relative to the base directory, targets to the output
/// directory. Missing sources are skipped. Returns the number of files
/// copied.
pub fn run(site: &Site) -> Result<usize> {
    let mut copied = 0;

    for (source, target) in &site.config.passthrough {
        let from = site.base_dir.join(source);
        let to = site.output_dir.join(target);

        if !from.exists() {
            tracing::debug!("Passthrough source {:?} does not exist, skipping", from);
            continue;
        }

        copied += copy_tree(&from, &to)?;
        tracing::info!("Copied {:?} -> {:?}", from, to);
    }

    Ok(copied)
}

fn copy_tree(from: &Path, to: &Path) -> Result<usize> {
    if from.is_file() {
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(from, to)?;
        return Ok(1);
    }

    let mut copied = 0;
    for entry in WalkDir::new(from).into_iter().filter_map(|e| e.ok()) {
        let relative = entry.path().strip_prefix(from)?;
        let dest = to.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else if entry.file_type().is_file() {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &dest)?;
            copied += 1;
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    #[test]
    fn test_copy_images() {
        let dir = tempfile::tempdir().unwrap();
        let images = dir.path().join("src/images");
        fs::create_dir_all(images.join("2024")).unwrap();
        fs::write(images.join("logo.png"), "png").unwrap();
        fs::write(images.join("2024/cat.jpg"), "jpg").unwrap();

        let site = Site::new(dir.path(), Environment::Development).unwrap();
        assert_eq!(run(&site).unwrap(), 2);

        let out = site.output_dir.join("images");
        assert_eq!(fs::read_to_string(out.join("logo.png")).unwrap(), "png");
        assert_eq!(fs::read_to_string(out.join("2024/cat.jpg")).unwrap(), "jpg");
    }

    #[test]
    fn test_single_file_and_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("robots.txt"), "User-agent: *").unwrap();
        fs::write(
            dir.path().join("site.yml"),
            "passthrough:\n  robots.txt: robots.txt\n  missing: gone\n",
        )
        .unwrap();

        let site = Site::new(dir.path(), Environment::Development).unwrap();
        assert_eq!(run(&site).unwrap(), 1);
        assert!(site.output_dir.join("robots.txt").is_file());
        assert!(!site.output_dir.join("gone").exists());
    }
}
