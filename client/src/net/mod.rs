//! HTTP calls to the site host.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host serves a single JSON endpoint the client needs: the per-page
//! image manifest used for preloading.

pub mod api;
