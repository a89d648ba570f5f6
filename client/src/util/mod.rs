//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser adapters for the `sitekit` core: web storage, DOM handles, the
//! wall clock, image preloading, and the draft persistence hook. Each one
//! degrades to a no-op outside the `hydrate` feature.

pub mod browser_store;
pub mod clock;
pub mod dom_handles;
pub mod draft_persistence;
pub mod image_preload;
