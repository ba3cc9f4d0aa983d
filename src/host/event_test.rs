use std::cell::Cell;
use std::rc::Rc;

use super::*;

fn counter() -> (Rc<Cell<u32>>, impl FnMut(&mut ()) + 'static) {
    let hits = Rc::new(Cell::new(0));
    let hits_cb = Rc::clone(&hits);
    (hits, move |_: &mut ()| hits_cb.set(hits_cb.get() + 1))
}

#[test]
fn emit_reaches_every_listener() {
    let listeners = Listeners::<()>::new();
    let (a, cb_a) = counter();
    let (b, cb_b) = counter();
    let sub_a = listeners.subscribe(cb_a);
    let sub_b = listeners.subscribe(cb_b);

    listeners.emit(&mut ());
    listeners.emit(&mut ());

    assert_eq!(a.get(), 2);
    assert_eq!(b.get(), 2);
    sub_a.forget();
    sub_b.forget();
}

#[test]
fn dropping_subscription_detaches() {
    let listeners = Listeners::<()>::new();
    let (hits, cb) = counter();
    let sub = listeners.subscribe(cb);
    listeners.emit(&mut ());
    drop(sub);
    listeners.emit(&mut ());

    assert_eq!(hits.get(), 1);
    assert!(listeners.is_empty());
}

#[test]
fn dispose_detaches_only_its_own_listener() {
    let listeners = Listeners::<()>::new();
    let (a, cb_a) = counter();
    let (b, cb_b) = counter();
    let sub_a = listeners.subscribe(cb_a);
    let _sub_b = listeners.subscribe(cb_b);

    sub_a.dispose();
    listeners.emit(&mut ());

    assert_eq!(a.get(), 0);
    assert_eq!(b.get(), 1);
    assert_eq!(listeners.len(), 1);
}

#[test]
fn forget_keeps_listener_attached() {
    let listeners = Listeners::<()>::new();
    let (hits, cb) = counter();
    listeners.subscribe(cb).forget();
    listeners.emit(&mut ());
    assert_eq!(hits.get(), 1);
}

#[test]
fn listeners_can_mutate_event_payload() {
    let listeners = Listeners::<Vec<&'static str>>::new();
    listeners.subscribe(|log: &mut Vec<&'static str>| log.push("first")).forget();
    listeners.subscribe(|log: &mut Vec<&'static str>| log.push("second")).forget();

    let mut log = Vec::new();
    listeners.emit(&mut log);
    assert_eq!(log, vec!["first", "second"]);
}

#[test]
fn disposer_outliving_listeners_is_harmless() {
    let listeners = Listeners::<()>::new();
    let sub = listeners.subscribe(|_: &mut ()| {});
    drop(listeners);
    sub.dispose();
}

#[test]
fn detached_subscription_disposes_cleanly() {
    let sub = Subscription::detached();
    assert!(format!("{sub:?}").contains("attached: false"));
    sub.dispose();
}
