//! Crate error type.
//!
//! Only service calls (storage, clipboard, config decoding) can fail. Missing
//! DOM targets are not errors: components report them as `None`/`false`.

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// The browser refused access to `localStorage` (private mode, policy).
    #[error("local storage is unavailable")]
    StorageUnavailable,

    #[error("storage operation failed: {0}")]
    Storage(String),

    #[error("draft payload could not be encoded or decoded: {0}")]
    DraftCodec(#[from] serde_json::Error),

    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    #[error("config parse failed: {0}")]
    Config(String),
}
