//! Swatchpad Application
//!
//! Shells around the core palette controller: DOM bindings for the
//! browser build, and a stdin-driven terminal front-end for native builds.

mod shortcuts;

pub use shortcuts::{Shortcut, ShortcutRegistry};

#[cfg(feature = "native")]
pub mod terminal;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{run_wasm, DomSelectors, DomSwatch, LocationFragment, WebApp, WebClipboard, WebError};
