//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! One [`ToastCenter`] per page, constructed explicitly and cloned into the
//! components that report outcomes. The container is created on first use.
//! Every toast is visible for the dismiss delay, plays the exit animation,
//! then leaves the DOM; there is no cap and no deduplication.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::consts::{TOAST_DISMISS_MS, TOAST_EXIT_MS};
use crate::host::{Page, ToastSurface};
use crate::runtime::Scheduler;

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual severity, rendered as `alert-<severity>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    /// Lenient parse for namespace callers; unknown names fall back to info.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("success") => Self::Success,
            Some("warning") => Self::Warning,
            Some("danger") => Self::Danger,
            _ => Self::Info,
        }
    }

    /// Class list for the rendered toast node.
    pub fn toast_class(self) -> String {
        format!("toast alert-{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    /// Exit animation running; removal follows.
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTiming {
    pub dismiss_ms: u32,
    pub exit_ms: u32,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self { dismiss_ms: TOAST_DISMISS_MS, exit_ms: TOAST_EXIT_MS }
    }
}

struct Inner {
    page: Rc<dyn Page>,
    scheduler: Rc<dyn Scheduler>,
    timing: ToastTiming,
    surface: RefCell<Option<Rc<dyn ToastSurface>>>,
    next_id: Cell<u64>,
    live: RefCell<Vec<Toast>>,
}

impl Inner {
    /// The container, looked up again until the page can provide one.
    fn surface(&self) -> Option<Rc<dyn ToastSurface>> {
        let mut slot = self.surface.borrow_mut();
        if slot.is_none() {
            *slot = self.page.toast_surface();
        }
        slot.clone()
    }

    fn begin_exit(&self, id: ToastId) {
        let mut live = self.live.borrow_mut();
        let Some(toast) = live.iter_mut().find(|t| t.id == id) else {
            return;
        };
        toast.phase = ToastPhase::Leaving;
        drop(live);
        if let Some(surface) = self.surface() {
            surface.begin_exit(id, self.timing.exit_ms);
        }
    }

    fn remove(&self, id: ToastId) {
        self.live.borrow_mut().retain(|t| t.id != id);
        if let Some(surface) = self.surface() {
            surface.unmount(id);
        }
    }
}

/// The page's notification dispatcher.
#[derive(Clone)]
pub struct ToastCenter {
    inner: Rc<Inner>,
}

impl ToastCenter {
    pub fn new(page: Rc<dyn Page>, scheduler: Rc<dyn Scheduler>, timing: ToastTiming) -> Self {
        Self {
            inner: Rc::new(Inner {
                page,
                scheduler,
                timing,
                surface: RefCell::new(None),
                next_id: Cell::new(0),
                live: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Show `message` and schedule its dismissal.
    pub fn show(&self, message: &str, severity: Severity) -> ToastId {
        let inner = &self.inner;
        let id = ToastId(inner.next_id.get());
        inner.next_id.set(id.0 + 1);

        let toast = Toast { id, message: message.to_owned(), severity, phase: ToastPhase::Visible };
        match inner.surface() {
            Some(surface) => surface.mount(&toast),
            None => log::warn!("no toast container yet; not rendering: {message}"),
        }
        inner.live.borrow_mut().push(toast);
        log::debug!("toast shown: id={} severity={} message={message}", id.0, severity.as_str());

        let weak: Weak<Inner> = Rc::downgrade(inner);
        inner.scheduler.schedule(
            inner.timing.dismiss_ms,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                inner.begin_exit(id);
                let weak = Rc::downgrade(&inner);
                inner.scheduler.schedule(
                    inner.timing.exit_ms,
                    Box::new(move || {
                        if let Some(inner) = weak.upgrade() {
                            inner.remove(id);
                        }
                    }),
                );
            }),
        );
        id
    }

    pub fn info(&self, message: &str) -> ToastId {
        self.show(message, Severity::Info)
    }

    pub fn success(&self, message: &str) -> ToastId {
        self.show(message, Severity::Success)
    }

    pub fn warning(&self, message: &str) -> ToastId {
        self.show(message, Severity::Warning)
    }

    pub fn danger(&self, message: &str) -> ToastId {
        self.show(message, Severity::Danger)
    }

    /// Live toasts in insertion order.
    pub fn active(&self) -> Vec<Toast> {
        self.inner.live.borrow().clone()
    }

    pub fn timing(&self) -> ToastTiming {
        self.inner.timing
    }
}

impl std::fmt::Debug for ToastCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastCenter")
            .field("timing", &self.inner.timing)
            .field("live", &self.inner.live.borrow().len())
            .finish_non_exhaustive()
    }
}
