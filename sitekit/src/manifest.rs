//! Per-page image manifest.
//!
//! The server loads this from YAML and serves it as JSON; the client feeds
//! [`SiteManifest::all_images`] to the preload tracker.

#[cfg(test)]
#[path = "manifest_test.rs"]
mod manifest_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Images displayed by a single page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageImages {
    /// Route-level page name, e.g. `"home"` or `"achievements"`.
    pub page: String,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteManifest {
    #[serde(default)]
    pub pages: Vec<PageImages>,
}

impl SiteManifest {
    /// Every image across all pages, deduplicated in first-seen order.
    #[must_use]
    pub fn all_images(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.pages
            .iter()
            .flat_map(|p| p.images.iter())
            .filter(|src| seen.insert(src.as_str()))
            .cloned()
            .collect()
    }

    /// Images for `page`, or an empty slice for unknown pages.
    #[must_use]
    pub fn images_for(&self, page: &str) -> &[String] {
        self.pages
            .iter()
            .find(|p| p.page == page)
            .map(|p| p.images.as_slice())
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(|p| p.images.is_empty())
    }
}
