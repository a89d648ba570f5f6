//! Landing page: a gallery of the images listed for the home page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::state::site::{ManifestStatus, SiteState};

/// Manifest page name for this route.
pub const HOME_PAGE: &str = "home";

/// Alt text derived from an image path: `/images/sunset-beach.jpg` becomes `sunset beach`.
pub fn alt_text(src: &str) -> String {
    let file = src.rsplit('/').next().unwrap_or(src);
    let stem = file.split_once('.').map_or(file, |(stem, _)| stem);
    stem.split(['-', '_']).filter(|w| !w.is_empty()).collect::<Vec<_>>().join(" ")
}

#[component]
pub fn HomePage() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let images = move || site.with(|s| s.images_for(HOME_PAGE));
    let unavailable = move || site.with(|s| matches!(s.status, ManifestStatus::Failed(_)));

    view! {
        <main class="home">
            <h1 class="home__title">"Portfolio"</h1>
            <Show when=unavailable>
                <p class="home__notice">"Images are unavailable right now."</p>
            </Show>
            <div class="home__gallery">
                <For each=images key=|src| src.clone() let:src>
                    <img class="home__photo" alt=alt_text(&src) src=src loading="lazy"/>
                </For>
            </div>
        </main>
    }
}
