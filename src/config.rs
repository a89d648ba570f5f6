//! Server configuration parsed from environment variables.
//!
//! Every variable is optional:
//! - `PORT`: listen port, default `3000`
//! - `SITE_MANIFEST`: YAML manifest of page images, default `site.yaml`
//! - `IMAGES_DIR`: directory served at `/images`, default `images`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_MANIFEST: &str = "site.yaml";
pub const DEFAULT_IMAGES_DIR: &str = "images";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub manifest_path: PathBuf,
    pub images_dir: PathBuf,
}

impl SiteConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but not a valid port.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = env_parse(lookup("PORT").as_deref(), DEFAULT_PORT).map_err(ConfigError::InvalidPort)?;
        let manifest_path = lookup("SITE_MANIFEST")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_SITE_MANIFEST), PathBuf::from);
        let images_dir = lookup("IMAGES_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_IMAGES_DIR), PathBuf::from);
        Ok(Self { port, manifest_path, images_dir })
    }
}

/// Parse an optional raw value, falling back to `default` when absent.
/// A present but unparsable value is returned as the error.
pub(crate) fn env_parse<T: FromStr>(raw: Option<&str>, default: T) -> Result<T, String> {
    match raw {
        None => Ok(default),
        Some(v) => v.trim().parse::<T>().map_err(|_| v.to_owned()),
    }
}
