//! Build environment (development / production)

use std::fmt;
use std::str::FromStr;

/// Name of the environment variable selecting the build environment
pub const ENV_VAR: &str = "SITE_ENV";

/// Which kind of build is running
///
/// Development builds use the built-in asset manifest. Production builds
/// read the bundler manifest and minify HTML output. Anything else reads
/// the manifest but leaves output untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    Production,
    #[default]
    Default,
}

impl Environment {
    /// Read the environment from `SITE_ENV`
    pub fn from_env() -> Self {
        std::env::var(ENV_VAR)
            .map(|value| Self::parse_lossy(&value))
            .unwrap_or_default()
    }

    /// Parse a name, mapping unknown values to `Default`
    pub fn parse_lossy(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Self::Development,
            "production" | "prod" => Self::Production,
            _ => Self::Default,
        }
    }

    pub fn is_development(&self) -> bool {
        *self == Self::Development
    }

    pub fn is_production(&self) -> bool {
        *self == Self::Production
    }
}

impl FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lossy(s))
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Default => "default",
        };
        f.write_str(name)
    }
}
