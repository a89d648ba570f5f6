//! Shared constants: storage keys, DOM element ids, and default timings.

/// Session storage key recording that the first load of this tab session finished.
pub const SESSION_MARKER_KEY: &str = "site-initial-load-complete";

/// Value written under [`SESSION_MARKER_KEY`] on completion.
pub const SESSION_MARKER_VALUE: &str = "true";

/// Id of the static loading screen rendered before the app mounts.
pub const INITIAL_LOADER_ID: &str = "initial-loader";

/// Id of the container wrapping the application content.
pub const ROOT_ID: &str = "root";

/// Class added to the initial loader to start its fade-out.
pub const HIDDEN_CLASS: &str = "hidden";

/// Class on the root container that keeps content hidden while gated.
pub const LOADING_HIDDEN_CLASS: &str = "loading-hidden";

/// Fade duration shared by the overlay fade-out and the content fade-in.
pub const TRANSITION_DURATION_MS: f64 = 500.0;

/// Upper bound on how long the preload tracker may block the site.
pub const DEFAULT_FALLBACK_TIMEOUT_MS: f64 = 10_000.0;

/// Minimum time the loader stays up, so it never flashes.
pub const DEFAULT_MIN_DISPLAY_TIME_MS: f64 = 500.0;

/// Quiet period before a draft change is written to storage.
pub const DEFAULT_DEBOUNCE_MS: f64 = 500.0;

/// Smallest width or height a placed photo may be resized to.
pub const MIN_PLACEMENT_SIZE: f64 = 24.0;

/// Number of layout revisions kept before the oldest is evicted.
pub const MAX_LAYOUT_REVISIONS: usize = 20;

/// Default editor canvas size for a new photoshoot layout.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1200.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 800.0;

/// Server route that serves the image manifest as JSON.
pub const PRELOAD_MANIFEST_PATH: &str = "/api/preload-manifest";
