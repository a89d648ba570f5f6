//! Site-wide state: the image manifest and its fetch status.
//!
//! DESIGN
//! ======
//! The manifest is fetched once by `App` and provided as
//! `RwSignal<SiteState>`. The loader gate derives its preload set from it; a
//! failed fetch still resolves the set (to nothing) so the gate only waits for
//! the minimum display time.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use sitekit::manifest::SiteManifest;

/// Fetch status of the preload manifest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ManifestStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteState {
    pub manifest: SiteManifest,
    pub status: ManifestStatus,
}

impl SiteState {
    pub fn ready(manifest: SiteManifest) -> Self {
        Self { manifest, status: ManifestStatus::Ready }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self { manifest: SiteManifest::default(), status: ManifestStatus::Failed(reason.into()) }
    }

    /// Images to preload, or `None` while the manifest is still loading.
    pub fn preload_sources(&self) -> Option<Vec<String>> {
        match self.status {
            ManifestStatus::Loading => None,
            ManifestStatus::Ready => Some(self.manifest.all_images()),
            ManifestStatus::Failed(_) => Some(Vec::new()),
        }
    }

    /// Images displayed by `page`.
    pub fn images_for(&self, page: &str) -> Vec<String> {
        self.manifest.images_for(page).to_vec()
    }
}
