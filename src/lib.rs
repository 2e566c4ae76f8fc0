//! leafkit: filters, collections and output transforms for a static blog build
//!
//! Templates are rendered elsewhere. This crate provides what the build
//! hands to them: the tag vocabulary, per-page tag lists, excerpts, date
//! filters, the bundled asset shortcodes and the HTML minifying transform.

pub mod assets;
pub mod collections;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod filters;
pub mod transforms;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use error::{SiteError, SiteResult};

/// Name of the site configuration file in the base directory
pub const CONFIG_FILE: &str = "site.yml";

/// A site directory and the environment it is built for
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Build environment
    pub env: config::Environment,
    /// Base directory
    pub base_dir: PathBuf,
    /// Input (content) directory
    pub input_dir: PathBuf,
    /// Output directory
    pub output_dir: PathBuf,
}

impl Site {
    /// Open a site directory, reading `site.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P, env: config::Environment) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let input_dir = base_dir.join(&config.dir.input);
        let output_dir = base_dir.join(&config.dir.output);

        Ok(Self {
            config,
            env,
            base_dir,
            input_dir,
            output_dir,
        })
    }

    /// Asset manifest for this build
    pub fn manifest(&self) -> Result<assets::AssetManifest> {
        Ok(assets::AssetManifest::for_environment(
            self.env,
            &self.output_dir,
        )?)
    }

    /// Filters bound to this site's config and manifest
    pub fn filters(&self) -> Result<filters::Filters> {
        Ok(filters::Filters::new(self.config.clone(), self.manifest()?))
    }

    /// Output transforms for this build
    pub fn transforms(&self) -> transforms::Transforms {
        transforms::Transforms::new(self.env)
    }

    /// Load and render the content collection
    pub fn load_content(&self) -> Result<Vec<content::ContentItem>> {
        content::loader::ContentLoader::new(self).load_all()
    }

    /// Clean the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
