//! Page-global namespace surface.
//!
//! The browser bindings only build for wasm, so this checks their source:
//! every helper must be installed on `window.ASCEND` and exported from the
//! module under the same JavaScript name.

use std::fs;

use ascend_ui::consts::{NAMESPACE_GLOBAL, NAMESPACE_HELPERS};

fn bindings_source() -> String {
    fs::read_to_string("src/bindings.rs").unwrap_or_default()
}

#[test]
fn namespace_is_installed_on_window() {
    let src = bindings_source();
    assert_eq!(NAMESPACE_GLOBAL, "ASCEND");
    assert!(src.contains("install_namespace(&window)"), "start() must install the namespace");
    assert!(src.contains("JsValue::from_str(NAMESPACE_GLOBAL)"));
}

#[test]
fn toast_is_a_dispatcher_with_show() {
    let src = bindings_source();
    assert!(src.contains(r#"JsValue::from_str("toast"), &toasts"#));
    assert!(src.contains(r#""show""#));
}

#[test]
fn every_helper_is_defined_and_exported() {
    let src = bindings_source();
    let missing: Vec<&str> = NAMESPACE_HELPERS
        .iter()
        .copied()
        .filter(|name| !src.contains(&format!("\"{name}\"")) || !src.contains(&format!("js_name = {name}")))
        .collect();
    assert!(missing.is_empty(), "helpers missing from window.ASCEND or module exports: {missing:?}");
}
