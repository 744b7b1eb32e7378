//! # predictwell-web
//!
//! Browser-side session and navigation layer for the PredictWell pages.
//! Compiled to WASM with the `hydrate` feature; every static HTML page loads
//! the same module and calls [`entry`] exports to mount its navigation bar.
//!
//! The crate tracks whether the visitor is logged in through a small
//! credential record in `localStorage`, renders the navigation markup from
//! that state, and injects it into each page exactly once. Native builds
//! (no feature) swap the browser seams for in-memory stand-ins so the same
//! logic runs under `cargo test`.

pub mod mount;
pub mod nav;
pub mod net;
pub mod session;

#[cfg(feature = "hydrate")]
pub mod entry;
