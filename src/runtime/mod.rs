//! Runtime services injected into the components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Timers, persistent key/value storage and the clipboard are the only
//! browser facilities the helpers need beyond the DOM. Each sits behind a
//! trait so tests can swap in deterministic in-memory versions.

pub mod clipboard;
pub mod scheduler;
pub mod storage;

pub use clipboard::Clipboard;
pub use scheduler::{ManualScheduler, Scheduler};
pub use storage::{KeyValueStore, MemoryStore};
