//! Bundled asset manifest and the script/style shortcodes built on it

use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Environment;
use crate::error::{SiteError, SiteResult};

/// Logical name of the bundled stylesheet
pub const MAIN_CSS: &str = "main.css";
/// Logical name of the bundled script
pub const MAIN_JS: &str = "main.js";

/// Maps logical asset names to the paths the bundler wrote them to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetManifest {
    entries: IndexMap<String, String>,
}

impl AssetManifest {
    /// Fixed manifest for development builds, where the bundler serves
    /// unhashed files
    pub fn development() -> Self {
        let mut entries = IndexMap::new();
        entries.insert(MAIN_JS.to_string(), "/assets/main.js".to_string());
        entries.insert(MAIN_CSS.to_string(), "/assets/main.css".to_string());
        Self { entries }
    }

    /// Location of the bundler manifest inside an output directory
    pub fn default_path(output_dir: &Path) -> PathBuf {
        output_dir.join("assets").join("manifest.json")
    }

    /// Load a manifest written by the bundler (a JSON object of strings)
    pub fn load<P: AsRef<Path>>(path: P) -> SiteResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| SiteError::Manifest {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let entries: IndexMap<String, String> =
            serde_json::from_str(&content).map_err(|e| SiteError::Manifest {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        tracing::debug!("Loaded {} asset(s) from {:?}", entries.len(), path);
        Ok(Self { entries })
    }

    /// Manifest for the given environment
    pub fn for_environment(env: Environment, output_dir: &Path) -> SiteResult<Self> {
        if env.is_development() {
            Ok(Self::development())
        } else {
            Self::load(Self::default_path(output_dir))
        }
    }

    /// Bundled path for a logical asset name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stylesheet link for the main bundle, or nothing if it isn't listed
    pub fn bundled_css(&self) -> String {
        self.get(MAIN_CSS)
            .filter(|path| !path.is_empty())
            .map(|path| format!(r#"<link href="{}" rel="stylesheet" />"#, path))
            .unwrap_or_default()
    }

    /// Script tag for the main bundle, or nothing if it isn't listed
    pub fn bundled_js(&self) -> String {
        self.get(MAIN_JS)
            .filter(|path| !path.is_empty())
            .map(|path| format!(r#"<script src="{}"></script>"#, path))
            .unwrap_or_default()
    }
}
