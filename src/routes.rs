//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the JSON API (`/healthz`, the preload manifest),
//! the Leptos SSR pages, the compiled WASM bundle under `/pkg`, and the
//! photo files under `/images`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use sitekit::consts::PRELOAD_MANIFEST_PATH;
use sitekit::manifest::SiteManifest;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared state for API handlers.
#[derive(Clone, Default)]
pub struct AppState {
    pub manifest: Arc<SiteManifest>,
}

impl AppState {
    pub fn new(manifest: SiteManifest) -> Self {
        Self { manifest: Arc::new(manifest) }
    }
}

/// JSON API routes.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route(PRELOAD_MANIFEST_PATH, get(preload_manifest))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full site: API routes, Leptos SSR, `/pkg` assets, and `/images`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState, images_dir: &Path) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .nest_service("/images", ServeDir::new(images_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn preload_manifest(State(state): State<AppState>) -> Json<SiteManifest> {
    Json(state.manifest.as_ref().clone())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
