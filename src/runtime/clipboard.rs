//! Asynchronous clipboard writes.

use futures::future::LocalBoxFuture;

use crate::error::UiError;

pub trait Clipboard {
    /// Write `text` to the system clipboard.
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), UiError>>;
}

/// `navigator.clipboard`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

#[cfg(feature = "hydrate")]
impl Clipboard for BrowserClipboard {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), UiError>> {
        use futures::FutureExt;

        let text = text.to_owned();
        async move {
            let clipboard = navigator_clipboard()?;
            wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
                .await
                .map(|_| ())
                .map_err(|e| UiError::Clipboard(format!("{e:?}")))
        }
        .boxed_local()
    }
}

/// `navigator.clipboard` is missing outside secure contexts.
#[cfg(feature = "hydrate")]
fn navigator_clipboard() -> Result<web_sys::Clipboard, UiError> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or_else(|| UiError::Clipboard("no window".into()))?;
    let value = js_sys::Reflect::get(&window.navigator(), &"clipboard".into())
        .map_err(|e| UiError::Clipboard(format!("{e:?}")))?;
    value
        .dyn_into::<web_sys::Clipboard>()
        .map_err(|_| UiError::Clipboard("clipboard API unavailable".into()))
}
