#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Rolegate page behaviours compiled to WebAssembly.
//!
//! Three independent behaviours for the server-rendered panel pages: flash
//! banner auto-dismissal, a persisted light/dark theme toggle, and the delete
//! confirmation overlay. `logic` holds the DOM-free logic; the browser bindings
//! and JavaScript exports only exist on `wasm32`.
//!
//! Loading from a template:
//!
//! ```text
//! import init, { confirmDelete, closeModal } from "/static/pkg/rolegate_ui.js";
//! await init();
//! Object.assign(window, { confirmDelete, closeModal });
//! ```

pub mod config;
pub mod error;
pub mod logic;

pub use config::PageConfig;
pub use error::UiError;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
pub mod entry;
