//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Shared site data comes from the
//! `SiteState` context.

pub mod home;
pub mod photoshoot_layout;
