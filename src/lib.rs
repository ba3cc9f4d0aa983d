//! # ascend-ui
//!
//! Browser-side UI helpers for the ASCEND question/answer pages: toasts,
//! required-field validation, list filtering, draft auto-save, character
//! counters, confirmation gating, scrolling, clipboard copy and the loading
//! overlay.
//!
//! The crate is compiled to WebAssembly for the page (`hydrate` feature) and
//! as a plain `rlib` everywhere else. Components only ever talk to the
//! traits in [`host`] and [`runtime`], so the same code runs against the real
//! DOM and against the headless [`host::memory`] page used by tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | `Ascend` shell: page boot and the page-global helper namespace |
//! | [`ui`] | The components (toast, validate, filter, draft, counter, misc) |
//! | [`host`] | DOM seam traits, subscriptions, headless and browser hosts |
//! | [`runtime`] | Timer scheduler, key/value storage, clipboard services |
//! | [`config`] | Page-level configuration with defaults |
//! | [`consts`] | Well-known ids, classes, storage keys and timings |
//! | [`error`] | Crate error type |

pub mod app;
pub mod config;
pub mod consts;
pub mod error;
pub mod host;
pub mod runtime;
pub mod ui;

#[cfg(feature = "hydrate")]
mod bindings;

pub use app::Ascend;
pub use error::UiError;
