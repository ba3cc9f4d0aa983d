//! Listener registration with explicit disposers.
//!
//! DESIGN
//! ======
//! Every `on_*` hook in the host traits returns a [`Subscription`]. Dropping
//! it detaches the listener; [`Subscription::forget`] keeps it attached for
//! the lifetime of the page, which is what page-load wiring wants.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

/// Handle to a registered listener.
#[must_use = "dropping a Subscription detaches its listener"]
pub struct Subscription {
    dispose: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap a disposer that detaches the listener when run.
    pub fn new(dispose: impl FnOnce() + 'static) -> Self {
        Self { dispose: Some(Box::new(dispose)) }
    }

    /// A subscription with nothing to detach.
    pub fn detached() -> Self {
        Self { dispose: None }
    }

    /// Detach now.
    pub fn dispose(mut self) {
        if let Some(dispose) = self.dispose.take() {
            dispose();
        }
    }

    /// Keep the listener attached forever.
    ///
    /// The disposer is leaked rather than dropped: browser disposers own the
    /// wasm closure, and dropping it would invalidate the JS callback.
    pub fn forget(mut self) {
        if let Some(dispose) = self.dispose.take() {
            std::mem::forget(dispose);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(dispose) = self.dispose.take() {
            dispose();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("attached", &self.dispose.is_some()).finish()
    }
}

type Slot<E> = (u64, Rc<RefCell<dyn FnMut(&mut E)>>);

/// A list of callbacks for one event type, used by the headless host.
pub struct Listeners<E> {
    slots: Rc<RefCell<Vec<Slot<E>>>>,
    next_id: Cell<u64>,
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self { slots: Rc::new(RefCell::new(Vec::new())), next_id: Cell::new(0) }
    }
}

impl<E: 'static> Listeners<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback`; the returned subscription removes it.
    pub fn subscribe(&self, callback: impl FnMut(&mut E) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let callback: Rc<RefCell<dyn FnMut(&mut E)>> = Rc::new(RefCell::new(callback));
        self.slots.borrow_mut().push((id, callback));

        let slots: Weak<RefCell<Vec<Slot<E>>>> = Rc::downgrade(&self.slots);
        Subscription::new(move || {
            if let Some(slots) = slots.upgrade() {
                slots.borrow_mut().retain(|(slot_id, _)| *slot_id != id);
            }
        })
    }

    /// Call every listener registered at the time of the call, in order.
    ///
    /// Callbacks may subscribe or dispose while running. A callback that
    /// re-enters itself through a nested emit is skipped for that nested call.
    pub fn emit(&self, event: &mut E) {
        let snapshot: Vec<_> = self.slots.borrow().iter().map(|(_, cb)| Rc::clone(cb)).collect();
        for callback in snapshot {
            if let Ok(mut callback) = callback.try_borrow_mut() {
                (*callback)(event);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}
