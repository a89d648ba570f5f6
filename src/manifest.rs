//! Site manifest loading.
//!
//! The manifest is a YAML list of pages and the images each one displays. It
//! is read once at startup and served to the client as JSON, where it becomes
//! the preload set for the site loader.
//!
//! ```yaml
//! pages:
//!   - page: home
//!     images:
//!       - /images/hero.jpg
//! ```

#[cfg(test)]
#[path = "manifest_test.rs"]
mod manifest_test;

use std::path::Path;

use sitekit::manifest::SiteManifest;

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read manifest {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse manifest {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("manifest page #{index} has an empty name")]
    EmptyPage { index: usize },
}

impl ManifestError {
    /// Whether the manifest file does not exist.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Read, parse, and validate the manifest at `path`.
///
/// # Errors
///
/// Returns [`ManifestError`] if the file cannot be read, is not valid YAML, or
/// fails validation.
pub async fn load(path: &Path) -> Result<SiteManifest, ManifestError> {
    let display = path.display().to_string();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ManifestError::Io { path: display.clone(), source })?;
    parse(&raw, &display)
}

/// Parse and validate manifest YAML. `path` is only used in error messages.
///
/// Image entries are trimmed and blank ones dropped.
///
/// # Errors
///
/// Returns [`ManifestError::Parse`] for invalid YAML and
/// [`ManifestError::EmptyPage`] for a page without a name.
pub fn parse(raw: &str, path: &str) -> Result<SiteManifest, ManifestError> {
    let mut manifest: SiteManifest =
        serde_yaml::from_str(raw).map_err(|source| ManifestError::Parse { path: path.to_owned(), source })?;
    for (index, page) in manifest.pages.iter_mut().enumerate() {
        if page.page.trim().is_empty() {
            return Err(ManifestError::EmptyPage { index });
        }
        page.images = page
            .images
            .iter()
            .map(|src| src.trim())
            .filter(|src| !src.is_empty())
            .map(str::to_owned)
            .collect();
    }
    Ok(manifest)
}
