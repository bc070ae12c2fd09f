//! Browser-hosted WASM app for the Sea Fund crowdfunding page.
//!
//! This crate is intentionally a stub by default so the workspace builds on
//! native targets without requiring wasm toolchains. The host-testable
//! pieces (the embedded catalog and the filter-button inventory) stay
//! outside the wasm-only `web` module.
//!
//! Enable the real app with: `--features web` (and a wasm32 target).

pub mod data;
pub mod ui_model;

/// Placeholder function for non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {
    // No-op.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
