use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recorder() -> Rc<RefCell<Vec<&'static str>>> {
    Rc::new(RefCell::new(Vec::new()))
}

fn push(log: &Rc<RefCell<Vec<&'static str>>>, label: &'static str) -> Task {
    let log = Rc::clone(log);
    Box::new(move || log.borrow_mut().push(label))
}

#[test]
fn task_waits_until_its_delay_has_elapsed() {
    let scheduler = ManualScheduler::new();
    let log = recorder();
    scheduler.schedule(100, push(&log, "fired"));

    scheduler.advance(99);
    assert!(log.borrow().is_empty());
    assert_eq!(scheduler.pending(), 1);

    scheduler.advance(1);
    assert_eq!(*log.borrow(), vec!["fired"]);
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(scheduler.now_ms(), 100);
}

#[test]
fn tasks_run_in_due_order_then_schedule_order() {
    let scheduler = ManualScheduler::new();
    let log = recorder();
    scheduler.schedule(50, push(&log, "late"));
    scheduler.schedule(10, push(&log, "early-a"));
    scheduler.schedule(10, push(&log, "early-b"));

    scheduler.advance(1000);
    assert_eq!(*log.borrow(), vec!["early-a", "early-b", "late"]);
}

#[test]
fn nested_task_inside_window_runs_in_same_advance() {
    let scheduler = Rc::new(ManualScheduler::new());
    let log = recorder();

    let inner_log = Rc::clone(&log);
    let inner_scheduler = Rc::clone(&scheduler);
    scheduler.schedule(
        5000,
        Box::new(move || {
            inner_log.borrow_mut().push("outer");
            inner_scheduler.schedule(300, push(&inner_log, "inner"));
        }),
    );

    scheduler.advance(5299);
    assert_eq!(*log.borrow(), vec!["outer"]);
    scheduler.advance(1);
    assert_eq!(*log.borrow(), vec!["outer", "inner"]);
}

#[test]
fn nested_task_sees_clock_at_parent_due_time() {
    let scheduler = Rc::new(ManualScheduler::new());
    let seen = Rc::new(RefCell::new(None));

    let seen_cb = Rc::clone(&seen);
    let clock = Rc::clone(&scheduler);
    scheduler.schedule(
        40,
        Box::new(move || {
            *seen_cb.borrow_mut() = Some(clock.now_ms());
        }),
    );

    scheduler.advance(100);
    assert_eq!(*seen.borrow(), Some(40));
    assert_eq!(scheduler.now_ms(), 100);
}
