//! Browser driver for the image preload tracker.
//!
//! SYSTEM CONTEXT
//! ==============
//! `sitekit::preload::PreloadTracker` decides when loading is over; this module
//! feeds it real events. Each source gets an off-screen `HtmlImageElement`
//! whose `onload`/`onerror` settle the image, and a single `gloo-timers`
//! timeout fires at the tracker's next deadline (minimum display time or
//! fallback). Progress is published through a Leptos signal.
//!
//! Callbacks hold a `Weak` reference to the driver, so dropping the driver on
//! cleanup also stops every pending callback.

#[cfg(test)]
#[path = "image_preload_test.rs"]
mod image_preload_test;

use leptos::prelude::*;
use sitekit::preload::{PreloadConfig, PreloadProgress};

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::{Rc, Weak};

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use sitekit::preload::{ImageOutcome, PreloadTracker};
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};
#[cfg(feature = "hydrate")]
use web_sys::HtmlImageElement;

#[cfg(feature = "hydrate")]
use crate::util::clock::{delay_until, now_ms};

/// Progress reported before any image has been discovered.
pub fn initial_progress(config: &PreloadConfig) -> PreloadProgress {
    PreloadProgress { total_images: 0, loaded_images: 0, is_loading: !config.skip }
}

/// Track the images in `sources` and return live progress.
///
/// `sources` is `None` until the image set is known. The first `Some` value is
/// the set that gets tracked; later values are ignored. The fallback timeout
/// runs from the moment this hook is called, so a manifest that never arrives
/// still ends loading.
pub fn use_image_preload(sources: Signal<Option<Vec<String>>>, config: PreloadConfig) -> ReadSignal<PreloadProgress> {
    let progress = RwSignal::new(initial_progress(&config));

    #[cfg(feature = "hydrate")]
    {
        let driver = Rc::new(Driver::new(config, progress));
        driver.schedule();
        let slot = StoredValue::new_local(Some(driver));

        Effect::new(move || {
            let Some(list) = sources.get() else {
                return;
            };
            slot.with_value(|driver| {
                if let Some(driver) = driver {
                    driver.start(list);
                }
            });
        });

        on_cleanup(move || {
            slot.try_update_value(|driver| {
                if let Some(driver) = driver.take() {
                    driver.shutdown();
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = sources;
    }

    progress.read_only()
}

#[cfg(feature = "hydrate")]
struct PendingImage {
    element: HtmlImageElement,
    _on_load: Closure<dyn FnMut()>,
    _on_error: Closure<dyn FnMut()>,
}

#[cfg(feature = "hydrate")]
struct Driver {
    tracker: RefCell<PreloadTracker>,
    timer: RefCell<Option<Timeout>>,
    images: RefCell<Vec<PendingImage>>,
    progress: RwSignal<PreloadProgress>,
}

#[cfg(feature = "hydrate")]
impl Driver {
    fn new(config: PreloadConfig, progress: RwSignal<PreloadProgress>) -> Self {
        Self {
            tracker: RefCell::new(PreloadTracker::new(config, now_ms())),
            timer: RefCell::new(None),
            images: RefCell::new(Vec::new()),
            progress,
        }
    }

    fn start(self: &Rc<Self>, sources: Vec<String>) {
        let pending = self.tracker.borrow_mut().discover(sources, now_ms());
        for src in pending {
            self.load(src);
        }
        self.publish();
        self.schedule();
    }

    fn load(self: &Rc<Self>, src: String) {
        let Ok(element) = HtmlImageElement::new() else {
            log::warn!("cannot create image element for {src}");
            self.settle(&src, ImageOutcome::Failed);
            return;
        };
        let on_load = settle_callback(Rc::downgrade(self), src.clone(), ImageOutcome::Loaded);
        let on_error = settle_callback(Rc::downgrade(self), src.clone(), ImageOutcome::Failed);
        element.set_onload(Some(on_load.as_ref().unchecked_ref()));
        element.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        element.set_src(&src);
        self.images.borrow_mut().push(PendingImage { element, _on_load: on_load, _on_error: on_error });
    }

    fn settle(self: &Rc<Self>, src: &str, outcome: ImageOutcome) {
        self.tracker.borrow_mut().record(src, outcome, now_ms());
        self.publish();
        self.schedule();
    }

    fn publish(&self) {
        let tracker = self.tracker.borrow();
        let next = tracker.progress();
        if self.progress.get_untracked() == next {
            return;
        }
        if !next.is_loading {
            log::info!(
                "image preload finished: {:?}, {}/{} settled, {} failed",
                tracker.finish_reason(),
                next.loaded_images,
                next.total_images,
                tracker.failed_images()
            );
        }
        self.progress.set(next);
    }

    /// Replace the deadline timer. Dropping the previous `Timeout` cancels it.
    fn schedule(self: &Rc<Self>) {
        let next = self.tracker.borrow().next_deadline();
        let timer = next.map(|due| {
            let driver = Rc::downgrade(self);
            Timeout::new(delay_until(due, now_ms()), move || {
                if let Some(driver) = driver.upgrade() {
                    driver.tracker.borrow_mut().poll(now_ms().max(due));
                    driver.publish();
                    driver.schedule();
                }
            })
        });
        *self.timer.borrow_mut() = timer;
    }

    fn shutdown(&self) {
        self.timer.borrow_mut().take();
        for image in self.images.borrow_mut().drain(..) {
            image.element.set_onload(None);
            image.element.set_onerror(None);
        }
    }
}

#[cfg(feature = "hydrate")]
fn settle_callback(driver: Weak<Driver>, src: String, outcome: ImageOutcome) -> Closure<dyn FnMut()> {
    Closure::<dyn FnMut()>::new(move || {
        if let Some(driver) = driver.upgrade() {
            driver.settle(&src, outcome);
        }
    })
}
