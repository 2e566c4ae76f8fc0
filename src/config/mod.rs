//! Configuration module

mod environment;
mod site;

pub use environment::Environment;
pub use site::DirConfig;
pub use site::SiteConfig;
