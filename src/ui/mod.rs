//! Page helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each helper is independent; only the draft manager and clipboard copy
//! report outcomes, and they do it through an injected [`toast::ToastCenter`].

pub mod counter;
pub mod draft;
pub mod filter;
pub mod misc;
pub mod toast;
pub mod validate;
