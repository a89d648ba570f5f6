//! Image preload tracker.
//!
//! Tracks a fixed set of image sources through load/error outcomes and decides
//! when the site may stop blocking on them. Loading ends when every discovered
//! image has settled and the minimum display time has passed, or when the
//! fallback timeout expires, whichever comes first.
//!
//! The tracker never touches timers itself. The host calls [`PreloadTracker::poll`]
//! when an image settles and again at [`PreloadTracker::next_deadline`].

#[cfg(test)]
#[path = "preload_test.rs"]
mod preload_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FALLBACK_TIMEOUT_MS, DEFAULT_MIN_DISPLAY_TIME_MS};

/// Tracker configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreloadConfig {
    /// Hard upper bound, measured from tracker creation.
    pub fallback_timeout_ms: f64,
    /// Minimum time before a fully settled image set may end loading.
    pub min_display_time_ms: f64,
    /// Skip tracking entirely (non-initial navigation).
    pub skip: bool,
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            fallback_timeout_ms: DEFAULT_FALLBACK_TIMEOUT_MS,
            min_display_time_ms: DEFAULT_MIN_DISPLAY_TIME_MS,
            skip: false,
        }
    }
}

/// Snapshot of tracker output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreloadProgress {
    pub total_images: usize,
    /// Images that loaded or failed. Never exceeds `total_images`.
    pub loaded_images: usize,
    pub is_loading: bool,
}

impl PreloadProgress {
    /// Percentage of settled images, 0 when nothing is tracked.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        if self.total_images == 0 {
            return 0.0;
        }
        self.loaded_images as f64 / self.total_images as f64 * 100.0
    }
}

/// Result of a single image request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageOutcome {
    Loaded,
    Failed,
}

/// Why the tracker stopped loading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinishReason {
    Skipped,
    Complete,
    TimedOut,
}

#[derive(Debug)]
pub struct PreloadTracker {
    config: PreloadConfig,
    started_ms: f64,
    sources: Vec<String>,
    settled: HashSet<String>,
    failed: usize,
    discovered: bool,
    finished: Option<FinishReason>,
}

impl PreloadTracker {
    #[must_use]
    pub fn new(config: PreloadConfig, now_ms: f64) -> Self {
        let finished = config.skip.then_some(FinishReason::Skipped);
        Self {
            config,
            started_ms: now_ms,
            sources: Vec::new(),
            settled: HashSet::new(),
            failed: 0,
            discovered: false,
            finished,
        }
    }

    /// Register the image set to track. Only the first call has any effect.
    ///
    /// Blank and duplicate sources are dropped; order of first appearance is kept.
    /// Returns the sources the host should start loading.
    pub fn discover<I, S>(&mut self, sources: I, now_ms: f64) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.discovered {
            return Vec::new();
        }
        self.discovered = true;

        let mut seen = HashSet::new();
        for src in sources {
            let src: String = src.into();
            let trimmed = src.trim();
            if trimmed.is_empty() || !seen.insert(trimmed.to_owned()) {
                continue;
            }
            self.sources.push(trimmed.to_owned());
        }
        log::debug!("preload discovered {} images", self.sources.len());

        self.poll(now_ms);
        if self.finished.is_some() {
            return Vec::new();
        }
        self.sources.clone()
    }

    /// Record the outcome for `src`. Unknown and already settled sources are ignored.
    pub fn record(&mut self, src: &str, outcome: ImageOutcome, now_ms: f64) {
        if !self.sources.iter().any(|s| s == src) || self.settled.contains(src) {
            return;
        }
        self.settled.insert(src.to_owned());
        if outcome == ImageOutcome::Failed {
            self.failed += 1;
            log::debug!("preload failed for {src}");
        }
        self.poll(now_ms);
    }

    /// Re-evaluate completion at `now_ms`. Returns whether loading is still in progress.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        if self.finished.is_some() {
            return false;
        }
        let elapsed = now_ms - self.started_ms;
        if self.all_settled() && elapsed >= self.config.min_display_time_ms {
            self.finish(FinishReason::Complete);
        } else if elapsed >= self.config.fallback_timeout_ms {
            self.finish(FinishReason::TimedOut);
        }
        self.finished.is_none()
    }

    /// Earliest time at which [`Self::poll`] could end loading.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        if self.finished.is_some() {
            return None;
        }
        let fallback = self.started_ms + self.config.fallback_timeout_ms;
        if self.all_settled() {
            let min_display = self.started_ms + self.config.min_display_time_ms;
            return Some(min_display.min(fallback));
        }
        Some(fallback)
    }

    #[must_use]
    pub fn progress(&self) -> PreloadProgress {
        PreloadProgress {
            total_images: self.sources.len(),
            loaded_images: self.settled.len().min(self.sources.len()),
            is_loading: self.finished.is_none(),
        }
    }

    #[must_use]
    pub fn finish_reason(&self) -> Option<FinishReason> {
        self.finished
    }

    #[must_use]
    pub fn failed_images(&self) -> usize {
        self.failed
    }

    fn all_settled(&self) -> bool {
        self.discovered && self.settled.len() >= self.sources.len()
    }

    fn finish(&mut self, reason: FinishReason) {
        log::debug!(
            "preload finished ({reason:?}): {}/{} settled, {} failed",
            self.settled.len(),
            self.sources.len(),
            self.failed
        );
        self.finished = Some(reason);
    }
}
