//! Clean the output directory

use anyhow::Result;
use std::fs;

use crate::Site;

/// Remove the output directory
pub fn run(site: &Site) -> Result<()> {
    if site.output_dir.exists() {
        fs::remove_dir_all(&site.output_dir)?;
        tracing::info!("Deleted: {:?}", site.output_dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    #[test]
    fn test_clean_removes_output() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path(), Environment::Development).unwrap();
        fs::create_dir_all(site.output_dir.join("posts")).unwrap();
        fs::write(site.output_dir.join("index.html"), "x").unwrap();

        run(&site).unwrap();
        assert!(!site.output_dir.exists());

        // Cleaning twice is fine
        run(&site).unwrap();
    }
}
