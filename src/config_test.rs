use super::*;
use crate::host::memory::{ElementSpec, MemoryPage};

#[test]
fn defaults_match_page_conventions() {
    let cfg = UiConfig::default();
    assert_eq!(cfg.toast_timing(), ToastTiming { dismiss_ms: 5000, exit_ms: 300 });
    assert_eq!(cfg.flash_timing(), FlashTiming { hide_ms: 5000, fade_ms: 500 });
    assert_eq!(cfg.level(), log::Level::Info);
    assert_eq!(
        cfg.drafts,
        vec![
            DraftTarget::new("ask-question-form", "ascend_question_draft"),
            DraftTarget::new("answer-form", "ascend_answer_draft"),
        ]
    );
}

#[test]
fn partial_json_keeps_other_defaults() {
    let cfg = UiConfig::from_json(r#"{"toast_dismiss_ms": 2000, "log_level": "DEBUG"}"#).unwrap();
    assert_eq!(cfg.toast_dismiss_ms, 2000);
    assert_eq!(cfg.toast_exit_ms, 300);
    assert_eq!(cfg.level(), log::Level::Debug);
    assert_eq!(cfg.drafts.len(), 2);
}

#[test]
fn drafts_list_replaces_defaults() {
    let cfg = UiConfig::from_json(r#"{"drafts": [{"form_id": "edit-form", "storage_key": "edit"}]}"#).unwrap();
    assert_eq!(cfg.drafts, vec![DraftTarget::new("edit-form", "edit")]);
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = UiConfig::from_json(r#"{"log_level": "loud"}"#).unwrap_err();
    assert!(matches!(err, UiError::Config(ref msg) if msg.contains("loud")));
}

#[test]
fn malformed_json_is_a_config_error() {
    assert!(matches!(UiConfig::from_json("{"), Err(UiError::Config(_))));
    assert!(matches!(UiConfig::from_json(r#"{"toast_exit_ms": -1}"#), Err(UiError::Config(_))));
}

#[test]
fn from_page_without_element_uses_defaults() {
    let page = MemoryPage::new();
    assert_eq!(UiConfig::from_page(&page), UiConfig::default());
}

#[test]
fn from_page_reads_embedded_json() {
    let page = MemoryPage::new();
    page.add_element(ElementSpec::new().id("ascend-config").text(r#"{"flash_hide_ms": 8000}"#));
    assert_eq!(UiConfig::from_page(&page).flash_hide_ms, 8000);
}

#[test]
fn from_page_with_invalid_json_falls_back() {
    let page = MemoryPage::new();
    page.add_element(ElementSpec::new().id("ascend-config").text("not json"));
    assert_eq!(UiConfig::from_page(&page), UiConfig::default());
}
