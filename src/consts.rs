//! Well-known page conventions shared by the components.

// ── Timings ─────────────────────────────────────────────────────

/// How long a toast stays fully visible, in milliseconds.
pub const TOAST_DISMISS_MS: u32 = 5000;

/// Length of the toast `slideOut` exit animation, in milliseconds.
pub const TOAST_EXIT_MS: u32 = 300;

/// Delay before server-rendered flash banners start fading.
pub const FLASH_HIDE_MS: u32 = 5000;

/// Flash banner fade duration, in milliseconds.
pub const FLASH_FADE_MS: u32 = 500;

// ── Element ids ─────────────────────────────────────────────────

pub const QUESTION_FORM_ID: &str = "ask-question-form";
pub const ANSWER_FORM_ID: &str = "answer-form";
pub const LOADING_OVERLAY_ID: &str = "loading-overlay";

/// Optional `<script type="application/json">` carrying a [`crate::config::UiConfig`].
pub const CONFIG_ELEMENT_ID: &str = "ascend-config";

/// `window` property holding the helper namespace for inline scripts.
pub const NAMESPACE_GLOBAL: &str = "ASCEND";

/// Members of `window.ASCEND` besides the `toast` dispatcher object.
pub const NAMESPACE_HELPERS: [&str; 7] = [
    "validateForm",
    "confirmAction",
    "filterList",
    "showLoading",
    "hideLoading",
    "scrollToElement",
    "copyToClipboard",
];

// ── Storage keys ────────────────────────────────────────────────

pub const QUESTION_DRAFT_KEY: &str = "ascend_question_draft";
pub const ANSWER_DRAFT_KEY: &str = "ascend_answer_draft";

// ── Classes and attributes ──────────────────────────────────────

pub const TOAST_CONTAINER_CLASS: &str = "toast-container";
pub const FLASH_ALERT_CLASS: &str = "alert";
pub const VALID_CLASS: &str = "is-valid";
pub const INVALID_CLASS: &str = "is-invalid";
pub const LOADING_OVERLAY_CLASS: &str = "loading-overlay";
pub const COUNTER_CLASS: &str = "form-text text-right";
pub const CONFIRM_ATTRIBUTE: &str = "data-confirm";

// ── Counter colors ──────────────────────────────────────────────

pub const COUNTER_OVER_LIMIT_COLOR: &str = "var(--danger-color)";
pub const COUNTER_NORMAL_COLOR: &str = "var(--text-secondary)";

// ── Messages ────────────────────────────────────────────────────

pub const DRAFT_LOADED_MESSAGE: &str = "Draft loaded";
pub const COPY_OK_MESSAGE: &str = "Copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy";
