//! JavaScript entry points.
//!
//! `start` runs when the module is instantiated and boots the page once the
//! DOM is parsed. The helpers are exported from the module and also
//! installed as `window.ASCEND` for plain inline scripts:
//!
//! ```js
//! ASCEND.toast.show("Saved", "success");
//! if (!ASCEND.validateForm("answer-form")) { /* ... */ }
//! ```

use std::cell::RefCell;

use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};

use crate::app::Ascend;
use crate::consts::NAMESPACE_GLOBAL;
use crate::ui::toast::Severity;

thread_local! {
    static APP: RefCell<Option<Ascend>> = const { RefCell::new(None) };
}

fn with_app<R>(fallback: R, f: impl FnOnce(&mut Ascend) -> R) -> R {
    APP.with(|cell| match cell.borrow_mut().as_mut() {
        Some(app) => f(app),
        None => {
            log::warn!("ascend-ui is not initialised");
            fallback
        }
    })
}

fn boot() {
    with_app((), Ascend::boot);
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Trace) {
        web_sys::console::warn_1(&format!("console_log init failed: {err}").into());
    }

    let Some(app) = Ascend::in_browser() else {
        log::warn!("no document; ascend-ui disabled");
        return;
    };
    log::set_max_level(app.config().level().to_level_filter());
    APP.with(|cell| *cell.borrow_mut() = Some(app));

    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = install_namespace(&window) {
        log::warn!("installing window.{NAMESPACE_GLOBAL} failed: {err:?}");
    }

    let Some(document) = window.document() else {
        return;
    };
    if document.ready_state() != "loading" {
        boot();
        return;
    }
    let on_ready = Closure::<dyn FnMut()>::new(boot);
    match document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref()) {
        Ok(()) => on_ready.forget(),
        Err(err) => log::warn!("deferring boot failed: {err:?}"),
    }
}

/// Attach `closure` as `target[name]` for the page's lifetime.
fn define<T: ?Sized + WasmClosure>(target: &js_sys::Object, name: &str, closure: Closure<T>) -> Result<(), JsValue> {
    js_sys::Reflect::set(target, &JsValue::from_str(name), closure.as_ref())?;
    closure.forget();
    Ok(())
}

/// `window.ASCEND`: `toast.show(message, severity)` plus the page helpers.
fn install_namespace(window: &web_sys::Window) -> Result<(), JsValue> {
    let toasts = js_sys::Object::new();
    define(
        &toasts,
        "show",
        Closure::<dyn FnMut(JsValue, JsValue)>::new(|message: JsValue, severity: JsValue| {
            toast(&message.as_string().unwrap_or_default(), severity.as_string());
        }),
    )?;

    let ns = js_sys::Object::new();
    js_sys::Reflect::set(&ns, &JsValue::from_str("toast"), &toasts)?;
    define(&ns, "validateForm", Closure::<dyn FnMut(String) -> bool>::new(|id: String| validate_form(&id)))?;
    define(
        &ns,
        "confirmAction",
        Closure::<dyn FnMut(String) -> bool>::new(|message: String| confirm_action(&message)),
    )?;
    define(
        &ns,
        "filterList",
        Closure::<dyn FnMut(String, String) -> bool>::new(|search: String, class: String| filter_list(&search, &class)),
    )?;
    define(&ns, "showLoading", Closure::<dyn FnMut()>::new(show_loading))?;
    define(&ns, "hideLoading", Closure::<dyn FnMut()>::new(hide_loading))?;
    define(
        &ns,
        "scrollToElement",
        Closure::<dyn FnMut(String) -> bool>::new(|id: String| scroll_to_element(&id)),
    )?;
    define(&ns, "copyToClipboard", Closure::<dyn FnMut(String)>::new(|text: String| copy_to_clipboard(&text)))?;

    js_sys::Reflect::set(window.as_ref(), &JsValue::from_str(NAMESPACE_GLOBAL), &ns)?;
    Ok(())
}

#[wasm_bindgen]
pub fn toast(message: &str, severity: Option<String>) {
    let severity = Severity::parse(severity.as_deref());
    with_app((), |app| {
        app.toast().show(message, severity);
    });
}

#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form_id: &str) -> bool {
    with_app(true, |app| app.validate_form(form_id))
}

#[wasm_bindgen(js_name = confirmAction)]
pub fn confirm_action(message: &str) -> bool {
    with_app(false, |app| app.confirm_action(message))
}

#[wasm_bindgen(js_name = filterList)]
pub fn filter_list(search_input_id: &str, item_class: &str) -> bool {
    with_app(false, |app| app.filter_list(search_input_id, item_class))
}

#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading() {
    with_app((), |app| app.show_loading());
}

#[wasm_bindgen(js_name = hideLoading)]
pub fn hide_loading() {
    with_app((), |app| app.hide_loading());
}

#[wasm_bindgen(js_name = scrollToElement)]
pub fn scroll_to_element(element_id: &str) -> bool {
    with_app(false, |app| app.scroll_to_element(element_id))
}

#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: &str) {
    let Some(copy) = with_app(None, |app| Some(app.copy_to_clipboard(text))) else {
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = copy.await {
            log::warn!("copy failed: {err}");
        }
    });
}
