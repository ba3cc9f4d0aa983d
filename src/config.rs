//! Page-level configuration.
//!
//! Pages may embed `<script id="ascend-config" type="application/json">`
//! with any subset of the fields below; missing keys keep their defaults.
//!
//! ```json
//! {
//!   "toast_dismiss_ms": 5000,
//!   "toast_exit_ms": 300,
//!   "flash_hide_ms": 5000,
//!   "flash_fade_ms": 500,
//!   "log_level": "info",
//!   "drafts": [{ "form_id": "answer-form", "storage_key": "ascend_answer_draft" }]
//! }
//! ```

use serde::Deserialize;

use crate::consts::{
    ANSWER_DRAFT_KEY, ANSWER_FORM_ID, CONFIG_ELEMENT_ID, FLASH_FADE_MS, FLASH_HIDE_MS, QUESTION_DRAFT_KEY,
    QUESTION_FORM_ID, TOAST_DISMISS_MS, TOAST_EXIT_MS,
};
use crate::error::UiError;
use crate::host::Page;
use crate::ui::misc::FlashTiming;
use crate::ui::toast::ToastTiming;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// A form whose draft is auto-saved under `storage_key`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DraftTarget {
    pub form_id: String,
    pub storage_key: String,
}

impl DraftTarget {
    pub fn new(form_id: &str, storage_key: &str) -> Self {
        Self { form_id: form_id.to_owned(), storage_key: storage_key.to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub toast_dismiss_ms: u32,
    pub toast_exit_ms: u32,
    pub flash_hide_ms: u32,
    pub flash_fade_ms: u32,
    pub log_level: String,
    pub drafts: Vec<DraftTarget>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_dismiss_ms: TOAST_DISMISS_MS,
            toast_exit_ms: TOAST_EXIT_MS,
            flash_hide_ms: FLASH_HIDE_MS,
            flash_fade_ms: FLASH_FADE_MS,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            drafts: vec![
                DraftTarget::new(QUESTION_FORM_ID, QUESTION_DRAFT_KEY),
                DraftTarget::new(ANSWER_FORM_ID, ANSWER_DRAFT_KEY),
            ],
        }
    }
}

impl UiConfig {
    /// Parse a JSON object; absent keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| UiError::Config(e.to_string()))?;
        parse_log_level(&config.log_level)?;
        Ok(config)
    }

    /// Read `#ascend-config` from the page, falling back to defaults.
    pub fn from_page(page: &dyn Page) -> Self {
        let Some(element) = page.element(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        match Self::from_json(&element.text_content()) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
                Self::default()
            }
        }
    }

    pub fn toast_timing(&self) -> ToastTiming {
        ToastTiming { dismiss_ms: self.toast_dismiss_ms, exit_ms: self.toast_exit_ms }
    }

    pub fn flash_timing(&self) -> FlashTiming {
        FlashTiming { hide_ms: self.flash_hide_ms, fade_ms: self.flash_fade_ms }
    }

    /// Validated log level; `info` if the stored name is unknown.
    pub fn level(&self) -> log::Level {
        parse_log_level(&self.log_level).unwrap_or(log::Level::Info)
    }
}

fn parse_log_level(raw: &str) -> Result<log::Level, UiError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Ok(log::Level::Error),
        "warn" | "warning" => Ok(log::Level::Warn),
        "info" => Ok(log::Level::Info),
        "debug" => Ok(log::Level::Debug),
        "trace" => Ok(log::Level::Trace),
        other => Err(UiError::Config(format!("unknown log_level: {other}"))),
    }
}
