//! # session-theme
//!
//! Session-scoped dark theme toggle for web pages, compiled to WebAssembly.
//!
//! At page load the controller reads the stored preference from
//! `sessionStorage` and marks the `<html>` element with a `dark` class when
//! the stored value is `"dark"`. Clicking any `.theme-toggle` element flips
//! the class and writes `"dark"` or `"light"` back to `sessionStorage`.
//!
//! The browser is reached only through two small traits, so the state machine
//! runs and is tested natively with in-memory fakes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | The two-valued [`theme::Theme`] preference and its wire strings |
//! | [`config`] | Storage key, marker class and trigger selector names |
//! | [`store`] | [`store::PreferenceStore`] seam over session storage |
//! | [`target`] | [`target::StyleTarget`] seam over the document root |
//! | [`controller`] | [`controller::ThemeController`] — initialize and toggle |
//! | `web` | `web-sys` bindings and the WASM entry point (`hydrate` only) |
//!
//! ## Threading
//!
//! Everything here assumes the browser's single-threaded event loop. The
//! controller mutates through `&mut self`, and the browser glue shares it via
//! `Rc<RefCell<_>>`, which is neither `Send` nor `Sync`.

pub mod config;
pub mod controller;
pub mod store;
pub mod target;
pub mod theme;
#[cfg(feature = "hydrate")]
pub mod web;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use store::{MemoryStore, PreferenceStore, StoreError};
pub use target::{MemoryTarget, StyleTarget};
pub use theme::Theme;
