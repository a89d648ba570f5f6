//! Portfolio site host: Leptos SSR, preload manifest API, and static images.

mod config;
mod manifest;
mod routes;

use sitekit::manifest::SiteManifest;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }
    tracing_subscriber::fmt::init();

    let config = config::SiteConfig::from_env()?;

    let site_manifest = match manifest::load(&config.manifest_path).await {
        Ok(loaded) => loaded,
        Err(e) if e.is_missing() => {
            tracing::warn!(path = %config.manifest_path.display(), "site manifest not found, serving an empty one");
            SiteManifest::default()
        }
        Err(e) => return Err(e.into()),
    };
    tracing::info!(
        pages = site_manifest.pages.len(),
        images = site_manifest.all_images().len(),
        "site manifest loaded"
    );

    let state = routes::AppState::new(site_manifest);
    let app = routes::app(state, &config.images_dir)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, images_dir = %config.images_dir.display(), "folio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
