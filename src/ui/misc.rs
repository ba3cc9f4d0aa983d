//! Small page utilities: confirmation gating, scrolling, the loading
//! overlay, clipboard copy and flash-banner auto-dismiss.

use std::rc::Rc;

use crate::consts::{
    CONFIRM_ATTRIBUTE, COPY_FAILED_MESSAGE, COPY_OK_MESSAGE, FLASH_ALERT_CLASS, FLASH_FADE_MS, FLASH_HIDE_MS,
    LOADING_OVERLAY_ID,
};
use crate::error::UiError;
use crate::host::{ClickEvent, Page, Subscription};
use crate::runtime::{Clipboard, Scheduler};
use crate::ui::toast::ToastCenter;

#[cfg(test)]
#[path = "misc_test.rs"]
mod misc_test;

/// Blocking yes/no prompt.
pub fn confirm_action(page: &dyn Page, message: &str) -> bool {
    page.confirm(message)
}

/// Ask for confirmation before any `[data-confirm]` element acts.
///
/// Declining prevents the element's default action (link navigation, form
/// submission).
pub fn guard_confirm_targets(page: &Rc<dyn Page>) -> Vec<Subscription> {
    page.elements_with_attribute(CONFIRM_ATTRIBUTE)
        .into_iter()
        .map(|element| {
            let message = element.attribute(CONFIRM_ATTRIBUTE).unwrap_or_default();
            let page = Rc::clone(page);
            element.on_click(Box::new(move |event: &mut ClickEvent| {
                if !page.confirm(&message) {
                    event.prevent_default();
                }
            }))
        })
        .collect()
}

/// Smooth-scroll to the element; `false` when it does not exist.
pub fn scroll_to_element(page: &dyn Page, element_id: &str) -> bool {
    let Some(element) = page.element(element_id) else {
        return false;
    };
    element.scroll_into_view();
    true
}

/// Show the full-page loading overlay unless it is already up.
pub fn show_loading(page: &dyn Page) {
    if page.element(LOADING_OVERLAY_ID).is_none() {
        page.append_overlay(LOADING_OVERLAY_ID);
    }
}

/// Remove the loading overlay if present.
pub fn hide_loading(page: &dyn Page) {
    if let Some(overlay) = page.element(LOADING_OVERLAY_ID) {
        overlay.remove();
    }
}

/// Write `text` to the clipboard and toast the outcome.
pub async fn copy_to_clipboard(clipboard: &dyn Clipboard, toasts: &ToastCenter, text: &str) -> Result<(), UiError> {
    match clipboard.write_text(text).await {
        Ok(()) => {
            toasts.success(COPY_OK_MESSAGE);
            Ok(())
        }
        Err(err) => {
            log::warn!("clipboard write failed: {err}");
            toasts.danger(COPY_FAILED_MESSAGE);
            Err(err)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlashTiming {
    pub hide_ms: u32,
    pub fade_ms: u32,
}

impl Default for FlashTiming {
    fn default() -> Self {
        Self { hide_ms: FLASH_HIDE_MS, fade_ms: FLASH_FADE_MS }
    }
}

/// Fade out and remove every `.alert` banner once `hide_ms` has passed.
///
/// Banners are looked up when the timer fires, not when it is scheduled.
pub fn schedule_flash_dismiss(page: &Rc<dyn Page>, scheduler: &Rc<dyn Scheduler>, timing: FlashTiming) {
    let page = Rc::clone(page);
    let fade_scheduler = Rc::clone(scheduler);
    scheduler.schedule(
        timing.hide_ms,
        Box::new(move || {
            for alert in page.elements_by_class(FLASH_ALERT_CLASS) {
                alert.fade_out(timing.fade_ms);
                fade_scheduler.schedule(timing.fade_ms, Box::new(move || alert.remove()));
            }
        }),
    );
}
