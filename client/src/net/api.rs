//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since the manifest is only
//! fetched in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `Err(String)` for logging; the caller falls back to
//! an empty preload set instead of blocking the page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use sitekit::manifest::SiteManifest;

#[cfg(any(test, feature = "hydrate"))]
fn manifest_failed_message(status: u16) -> String {
    format!("manifest request failed: {status}")
}

/// Fetch the per-page image manifest.
///
/// # Errors
///
/// Returns a message when the request fails, the server answers with a
/// non-success status, or the body is not a manifest.
pub async fn fetch_preload_manifest() -> Result<SiteManifest, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(sitekit::consts::PRELOAD_MANIFEST_PATH)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(manifest_failed_message(resp.status()));
        }
        resp.json::<SiteManifest>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
