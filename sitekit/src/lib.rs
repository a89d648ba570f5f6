//! Load gating and draft persistence core for the portfolio site.
//!
//! This crate is UI-framework agnostic and has no browser dependencies. Every
//! timing contract is driven by an explicit millisecond clock supplied by the
//! host, and every storage access goes through [`store::KeyValueStore`], so the
//! client crate only has to wire timers, DOM handles, and web storage around it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`store`] | Key-value storage seam and the in-memory [`store::MemoryStore`] |
//! | [`marker`] | Session-scoped "initial load complete" marker |
//! | [`preload`] | Image preload tracker (progress, fallback timeout, minimum display) |
//! | [`loader`] | Site loader gate state machine |
//! | [`drafts`] | Debounced form draft persistence with restore-on-mount |
//! | [`manifest`] | Per-page image manifest shared by server and client |
//! | [`layout`] | Photo layout data model and revision history |
//! | [`consts`] | Shared keys, element ids, and default timings |

pub mod consts;
pub mod drafts;
pub mod layout;
pub mod loader;
pub mod manifest;
pub mod marker;
pub mod preload;
pub mod store;
