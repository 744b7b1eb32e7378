//! Navigation bar: per-page configuration and the pure markup renderer.
//!
//! ARCHITECTURE
//! ============
//! `config` says what a page's navigation contains; `render` turns a
//! session snapshot plus that config into markup. Neither touches the DOM.

pub mod config;
pub mod render;

pub use config::{NavConfig, NavLink};
pub use render::render;
