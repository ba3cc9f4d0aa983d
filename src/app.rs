//! `Ascend`: the page's helper namespace and load-time wiring.
//!
//! ARCHITECTURE
//! ============
//! One `Ascend` per page owns the injected services, the single
//! [`ToastCenter`], every draft manager and every listener subscription.
//! Listeners live exactly as long as the `Ascend` value; in the browser it
//! is parked in a thread-local for the lifetime of the page.

use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::config::UiConfig;
use crate::error::UiError;
use crate::host::{Page, Subscription};
use crate::runtime::{Clipboard, KeyValueStore, Scheduler};
use crate::ui::counter::attach_textarea_counters;
use crate::ui::draft::DraftManager;
use crate::ui::filter;
use crate::ui::misc;
use crate::ui::toast::ToastCenter;
use crate::ui::validate;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Services a page runs against.
#[derive(Clone)]
pub struct Host {
    pub page: Rc<dyn Page>,
    pub store: Rc<dyn KeyValueStore>,
    pub scheduler: Rc<dyn Scheduler>,
    pub clipboard: Rc<dyn Clipboard>,
}

pub struct Ascend {
    host: Host,
    config: UiConfig,
    toasts: ToastCenter,
    drafts: Vec<DraftManager>,
    subscriptions: Vec<Subscription>,
    booted: bool,
}

impl Ascend {
    pub fn new(host: Host, config: UiConfig) -> Self {
        let toasts = ToastCenter::new(Rc::clone(&host.page), Rc::clone(&host.scheduler), config.toast_timing());
        Self { host, config, toasts, drafts: Vec::new(), subscriptions: Vec::new(), booted: false }
    }

    /// Page-load wiring: validation watchers, textarea counters, draft
    /// managers, confirmation guards and flash-banner dismissal.
    ///
    /// Runs once; later calls do nothing.
    pub fn boot(&mut self) {
        if self.booted {
            return;
        }
        self.booted = true;
        let page = &self.host.page;

        self.subscriptions.extend(validate::watch_required_fields(page.as_ref()));
        self.subscriptions.extend(attach_textarea_counters(page.as_ref()));

        for target in &self.config.drafts {
            if let Some(manager) = DraftManager::attach(
                page.as_ref(),
                &target.form_id,
                &target.storage_key,
                Rc::clone(&self.host.store),
                self.toasts.clone(),
            ) {
                self.drafts.push(manager);
            }
        }

        self.subscriptions.extend(misc::guard_confirm_targets(page));
        misc::schedule_flash_dismiss(page, &self.host.scheduler, self.config.flash_timing());

        log::info!(
            "ascend-ui booted: listeners={} drafts={}",
            self.subscriptions.len(),
            self.drafts.len()
        );
    }

    pub fn is_booted(&self) -> bool {
        self.booted
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// The page's toast dispatcher.
    pub fn toast(&self) -> &ToastCenter {
        &self.toasts
    }

    pub fn drafts(&self) -> &[DraftManager] {
        &self.drafts
    }

    pub fn validate_form(&self, form_id: &str) -> bool {
        validate::validate_form(self.host.page.as_ref(), form_id)
    }

    pub fn confirm_action(&self, message: &str) -> bool {
        misc::confirm_action(self.host.page.as_ref(), message)
    }

    /// Start live filtering; returns `false` when the search field is missing.
    pub fn filter_list(&mut self, search_input_id: &str, item_class: &str) -> bool {
        match filter::filter_list(&self.host.page, search_input_id, item_class) {
            Some(subscription) => {
                self.subscriptions.push(subscription);
                true
            }
            None => false,
        }
    }

    pub fn show_loading(&self) {
        misc::show_loading(self.host.page.as_ref());
    }

    pub fn hide_loading(&self) {
        misc::hide_loading(self.host.page.as_ref());
    }

    pub fn scroll_to_element(&self, element_id: &str) -> bool {
        misc::scroll_to_element(self.host.page.as_ref(), element_id)
    }

    /// Copy `text`; the outcome is also reported as a toast.
    pub fn copy_to_clipboard(&self, text: &str) -> LocalBoxFuture<'static, Result<(), UiError>> {
        let clipboard = Rc::clone(&self.host.clipboard);
        let toasts = self.toasts.clone();
        let text = text.to_owned();
        Box::pin(async move { misc::copy_to_clipboard(clipboard.as_ref(), &toasts, &text).await })
    }
}

impl std::fmt::Debug for Ascend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ascend")
            .field("booted", &self.booted)
            .field("drafts", &self.drafts)
            .field("subscriptions", &self.subscriptions.len())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "hydrate")]
impl Ascend {
    /// Bind to the live document, `localStorage`, timers and clipboard.
    ///
    /// Without `localStorage` drafts fall back to a per-page memory store.
    pub fn in_browser() -> Option<Self> {
        use crate::host::browser::BrowserPage;
        use crate::runtime::MemoryStore;
        use crate::runtime::clipboard::BrowserClipboard;
        use crate::runtime::scheduler::BrowserScheduler;
        use crate::runtime::storage::LocalStore;

        let page: Rc<dyn Page> = Rc::new(BrowserPage::current()?);
        let store: Rc<dyn KeyValueStore> = match LocalStore::open() {
            Ok(store) => Rc::new(store),
            Err(err) => {
                log::warn!("drafts will not persist: {err}");
                Rc::new(MemoryStore::new())
            }
        };
        let config = UiConfig::from_page(page.as_ref());
        let host = Host {
            page,
            store,
            scheduler: Rc::new(BrowserScheduler),
            clipboard: Rc::new(BrowserClipboard),
        };
        Some(Self::new(host, config))
    }
}
