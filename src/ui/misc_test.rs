use std::rc::Rc;

use futures::FutureExt;
use futures::executor::block_on;
use futures::future::LocalBoxFuture;

use super::*;
use crate::host::Element;
use crate::host::memory::{ElementSpec, MemoryPage};
use crate::runtime::ManualScheduler;
use crate::ui::toast::ToastTiming;

struct FakeClipboard {
    fail: bool,
    written: Rc<std::cell::RefCell<Vec<String>>>,
}

impl Clipboard for FakeClipboard {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), UiError>> {
        self.written.borrow_mut().push(text.to_owned());
        let fail = self.fail;
        async move { if fail { Err(UiError::Clipboard("denied".into())) } else { Ok(()) } }.boxed_local()
    }
}

fn toasts_for(page: &MemoryPage) -> ToastCenter {
    ToastCenter::new(page.shared(), Rc::new(ManualScheduler::new()), ToastTiming::default())
}

// =============================================================
// Confirmation
// =============================================================

#[test]
fn confirm_action_returns_user_answer() {
    let page = MemoryPage::new();
    page.queue_confirm(false);
    assert!(!confirm_action(&page, "Sure?"));
    assert!(confirm_action(&page, "Really?"));
    assert_eq!(page.prompts(), vec!["Sure?", "Really?"]);
}

#[test]
fn declined_confirmation_prevents_default() {
    let page = MemoryPage::new();
    let delete = page.add_element(ElementSpec::new().attr("data-confirm", "Delete this answer?"));
    let _subs = guard_confirm_targets(&page.shared());

    page.queue_confirm(false);
    assert!(!delete.click());
    assert_eq!(page.prompts(), vec!["Delete this answer?"]);
}

#[test]
fn accepted_confirmation_lets_action_through() {
    let page = MemoryPage::new();
    let delete = page.add_element(ElementSpec::new().attr("data-confirm", "Delete?"));
    let _subs = guard_confirm_targets(&page.shared());

    page.queue_confirm(true);
    assert!(delete.click());
}

#[test]
fn elements_without_data_confirm_are_not_guarded() {
    let page = MemoryPage::new();
    let plain = page.add_element(ElementSpec::new().class("btn"));
    let subs = guard_confirm_targets(&page.shared());

    assert!(subs.is_empty());
    assert!(plain.click());
    assert!(page.prompts().is_empty());
}

// =============================================================
// Scroll and overlay
// =============================================================

#[test]
fn scroll_to_existing_element() {
    let page = MemoryPage::new();
    let target = page.add_element(ElementSpec::new().id("answer-42"));
    assert!(scroll_to_element(&page, "answer-42"));
    assert_eq!(target.scroll_count(), 1);
}

#[test]
fn scroll_to_missing_element_is_noop() {
    let page = MemoryPage::new();
    assert!(!scroll_to_element(&page, "nowhere"));
}

#[test]
fn show_loading_is_idempotent() {
    let page = MemoryPage::new();
    show_loading(&page);
    show_loading(&page);
    assert_eq!(page.live_elements_with_id("loading-overlay"), 1);
}

#[test]
fn hide_loading_removes_overlay_and_tolerates_absence() {
    let page = MemoryPage::new();
    hide_loading(&page);

    show_loading(&page);
    hide_loading(&page);
    assert_eq!(page.live_elements_with_id("loading-overlay"), 0);

    show_loading(&page);
    assert_eq!(page.live_elements_with_id("loading-overlay"), 1);
}

// =============================================================
// Clipboard
// =============================================================

#[test]
fn successful_copy_shows_success_toast() {
    let page = MemoryPage::new();
    let toasts = toasts_for(&page);
    let clipboard = FakeClipboard { fail: false, written: Rc::default() };

    let result = block_on(copy_to_clipboard(&clipboard, &toasts, "https://ascend.test/q/1"));
    assert!(result.is_ok());
    assert_eq!(*clipboard.written.borrow(), vec!["https://ascend.test/q/1"]);

    let rendered = page.rendered_toasts();
    assert_eq!(rendered[0].message, "Copied to clipboard!");
    assert_eq!(rendered[0].class, "toast alert-success");
}

#[test]
fn failed_copy_shows_danger_toast() {
    let page = MemoryPage::new();
    let toasts = toasts_for(&page);
    let clipboard = FakeClipboard { fail: true, written: Rc::default() };

    let result = block_on(copy_to_clipboard(&clipboard, &toasts, "x"));
    assert!(matches!(result, Err(UiError::Clipboard(_))));

    let rendered = page.rendered_toasts();
    assert_eq!(rendered[0].message, "Failed to copy");
    assert_eq!(rendered[0].class, "toast alert-danger");
}

// =============================================================
// Flash banners
// =============================================================

#[test]
fn flash_banners_fade_then_disappear() {
    let page = MemoryPage::new();
    let banner = page.add_element(ElementSpec::new().class("alert").text("Welcome back"));
    let keep = page.add_element(ElementSpec::new().class("alert-info").text("not a banner"));
    let scheduler = Rc::new(ManualScheduler::new());
    let dyn_scheduler: Rc<dyn Scheduler> = scheduler.clone();

    schedule_flash_dismiss(&page.shared(), &dyn_scheduler, FlashTiming::default());

    scheduler.advance(4999);
    assert_eq!(banner.fade_ms(), None);

    scheduler.advance(1);
    assert_eq!(banner.fade_ms(), Some(500));
    assert!(!banner.is_removed());

    scheduler.advance(500);
    assert!(banner.is_removed());
    assert!(!keep.is_removed());
    assert!(page.elements_by_class("alert").is_empty());
}

#[test]
fn flash_banners_are_collected_when_timer_fires() {
    let page = MemoryPage::new();
    let scheduler = Rc::new(ManualScheduler::new());
    let dyn_scheduler: Rc<dyn Scheduler> = scheduler.clone();
    schedule_flash_dismiss(&page.shared(), &dyn_scheduler, FlashTiming { hide_ms: 100, fade_ms: 50 });

    let late = page.add_element(ElementSpec::new().class("alert"));
    scheduler.advance(150);
    assert!(late.is_removed());
    assert_eq!(late.text_content(), "");
}
