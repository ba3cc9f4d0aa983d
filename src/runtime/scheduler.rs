//! Fixed-delay timers.
//!
//! Toast auto-dismiss and flash-banner hiding are fire-and-forget: nothing
//! ever cancels a scheduled task. [`ManualScheduler`] runs the same tasks
//! against a virtual clock so timing can be asserted exactly.

use std::cell::{Cell, RefCell};

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Run `task` once after `delay_ms` milliseconds.
    fn schedule(&self, delay_ms: u32, task: Task);
}

struct Pending {
    due_ms: u64,
    seq: u64,
    task: Task,
}

/// Virtual-time scheduler driven by [`ManualScheduler::advance`].
#[derive(Default)]
pub struct ManualScheduler {
    now_ms: Cell<u64>,
    next_seq: Cell<u64>,
    pending: RefCell<Vec<Pending>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    /// Number of tasks still waiting.
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Move the clock forward by `ms`, running every task that falls due.
    ///
    /// Tasks run in due-time order, ties broken by scheduling order. Tasks
    /// scheduled while advancing run too if they fall inside the window.
    pub fn advance(&self, ms: u64) {
        let target = self.now_ms.get() + ms;
        while let Some(next) = self.take_next_due(target) {
            self.now_ms.set(next.due_ms);
            (next.task)();
        }
        self.now_ms.set(target);
    }

    fn take_next_due(&self, target: u64) -> Option<Pending> {
        let mut pending = self.pending.borrow_mut();
        let index = pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= target)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))
            .map(|(i, _)| i)?;
        Some(pending.remove(index))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        let due_ms = self.now_ms.get() + u64::from(delay_ms);
        self.pending.borrow_mut().push(Pending { due_ms, seq, task });
    }
}

/// `setTimeout`-backed scheduler.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        gloo_timers::callback::Timeout::new(delay_ms, task).forget();
    }
}
