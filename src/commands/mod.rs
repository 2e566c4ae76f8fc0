//! CLI commands

pub mod assets;
pub mod clean;
pub mod copy;
pub mod excerpt;
pub mod list;
pub mod transform;
