//! Library error type

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading site inputs or evaluating filters
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot load asset manifest {path:?}: {reason}")]
    Manifest { path: PathBuf, reason: String },

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

pub type SiteResult<T> = std::result::Result<T, SiteError>;
