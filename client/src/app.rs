//! Root document and application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use sitekit::consts::{INITIAL_LOADER_ID, LOADING_HIDDEN_CLASS, ROOT_ID};

use crate::components::site_loader::SiteLoader;
use crate::pages::{home::HomePage, photoshoot_layout::PhotoshootLayoutPage};
use crate::state::site::SiteState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <Document/>
            </body>
        </html>
    }
}

/// Body content: the static loading screen and the root container.
///
/// Neither element is reactive. `SiteLoader` hides and removes
/// `#initial-loader` and strips `loading-hidden` from `#root` through DOM
/// handles once the gate opens.
#[component]
pub fn Document() -> impl IntoView {
    view! {
        <div id=INITIAL_LOADER_ID class="initial-loader" aria-busy="true">
            <div class="initial-loader__spinner"></div>
        </div>
        <div id=ROOT_ID class=LOADING_HIDDEN_CLASS>
            <App/>
        </div>
    }
}

/// Root application component.
///
/// Provides the site manifest context, fetches the manifest in the browser,
/// and gates the router behind the site loader.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let site = RwSignal::new(SiteState::default());
    provide_context(site);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_preload_manifest().await {
            Ok(manifest) => site.set(SiteState::ready(manifest)),
            Err(e) => {
                log::warn!("preload manifest unavailable: {e}");
                site.set(SiteState::failed(e));
            }
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text="Portfolio"/>

        <SiteLoader>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("photoshoots"), ParamSegment("id"), StaticSegment("layout"))
                        view=PhotoshootLayoutPage
                    />
                </Routes>
            </Router>
        </SiteLoader>
    }
}
