#![allow(clippy::float_cmp)]

use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

// --- PagePoint ---

#[test]
fn page_point_offset_adds_components() {
    let p = PagePoint::new(10.0, 20.0).offset_by(PagePoint::new(2.5, -4.0));
    assert_eq!(p, PagePoint::new(12.5, 16.0));
}

// --- PointerEvents ---

#[test]
fn new_emitter_has_no_listeners() {
    assert_eq!(PointerEvents::new().listener_count(), 0);
}

#[test]
fn emit_reaches_every_listener() {
    let events = PointerEvents::new();
    let hits = Arc::new(AtomicUsize::new(0));
    let a = {
        let hits = Arc::clone(&hits);
        events.subscribe(move |_| {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    };
    let b = {
        let hits = Arc::clone(&hits);
        events.subscribe(move |_| {
            hits.fetch_add(10, Ordering::SeqCst);
        })
    };

    events.emit(PagePoint::new(1.0, 1.0));
    assert_eq!(hits.load(Ordering::SeqCst), 11);
    assert_eq!(events.listener_count(), 2);
    drop((a, b));
}

#[test]
fn dropping_subscription_removes_listener() {
    let events = PointerEvents::new();
    let hits = Arc::new(AtomicUsize::new(0));
    let sub = {
        let hits = Arc::clone(&hits);
        events.subscribe(move |_| {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    };
    assert_eq!(events.listener_count(), 1);

    drop(sub);
    assert_eq!(events.listener_count(), 0);

    events.emit(PagePoint::new(5.0, 5.0));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn explicit_unsubscribe_removes_listener() {
    let events = PointerEvents::new();
    let sub = events.subscribe(|_| {});
    sub.unsubscribe();
    assert_eq!(events.listener_count(), 0);
}

#[test]
fn clones_share_one_registry() {
    let events = PointerEvents::new();
    let clone = events.clone();
    let _sub = clone.subscribe(|_| {});
    assert_eq!(events.listener_count(), 1);
}

#[test]
fn subscription_outliving_emitter_drops_quietly() {
    let events = PointerEvents::new();
    let sub = events.subscribe(|_| {});
    drop(events);
    drop(sub);
}

#[test]
fn listener_may_subscribe_during_dispatch() {
    let events = PointerEvents::new();
    let nested: Arc<Mutex<Vec<Subscription>>> = Arc::new(Mutex::new(Vec::new()));
    let _outer = {
        let events = events.clone();
        let nested = Arc::clone(&nested);
        events.clone().subscribe(move |_| {
            let sub = events.subscribe(|_| {});
            nested.lock().unwrap().push(sub);
        })
    };

    events.emit(PagePoint::default());
    assert_eq!(events.listener_count(), 2);
}

// --- MousePosition ---

#[test]
fn mouse_position_is_none_before_first_move() {
    let events = PointerEvents::new();
    let mouse = MousePosition::track(&events);
    assert_eq!(mouse.current(), None);
}

#[test]
fn mouse_position_follows_latest_move() {
    let events = PointerEvents::new();
    let mouse = MousePosition::track(&events);
    events.emit(PagePoint::new(3.0, 4.0));
    events.emit(PagePoint::new(30.0, 40.0));
    assert_eq!(mouse.current(), Some(PagePoint::new(30.0, 40.0)));
}

#[test]
fn dropping_mouse_position_releases_listener() {
    let events = PointerEvents::new();
    {
        let mouse = MousePosition::track(&events);
        assert_eq!(events.listener_count(), 1);
        events.emit(PagePoint::new(1.0, 2.0));
        assert_eq!(mouse.current(), Some(PagePoint::new(1.0, 2.0)));
    }
    assert_eq!(events.listener_count(), 0);

    // No listener left to receive this.
    events.emit(PagePoint::new(9.0, 9.0));
    assert_eq!(events.listener_count(), 0);
}

#[test]
fn independent_trackers_release_independently() {
    let events = PointerEvents::new();
    let a = MousePosition::track(&events);
    let b = MousePosition::track(&events);
    events.emit(PagePoint::new(1.0, 1.0));
    drop(a);
    events.emit(PagePoint::new(2.0, 2.0));
    assert_eq!(events.listener_count(), 1);
    assert_eq!(b.current(), Some(PagePoint::new(2.0, 2.0)));
}

#[test]
fn mouse_position_clones_share_one_listener() {
    let events = PointerEvents::new();
    let mouse = MousePosition::track(&events);
    let clone = mouse.clone();
    assert_eq!(events.listener_count(), 1);

    events.emit(PagePoint::new(7.0, 8.0));
    assert_eq!(clone.current(), Some(PagePoint::new(7.0, 8.0)));

    drop(mouse);
    assert_eq!(events.listener_count(), 1);
    drop(clone);
    assert_eq!(events.listener_count(), 0);
}

// --- StickCursor ---

#[test]
fn stick_cursor_applies_offset() {
    let events = PointerEvents::new();
    let cursor = StickCursor::with_offset(MousePosition::track(&events), PagePoint::new(2.0, 3.0));
    assert_eq!(cursor.position(), None);

    events.emit(PagePoint::new(100.0, 50.0));
    assert_eq!(cursor.position(), Some(PagePoint::new(102.0, 53.0)));
}

#[test]
fn stick_cursor_defaults_to_tooltip_offset() {
    let events = PointerEvents::new();
    let cursor = StickCursor::new(MousePosition::track(&events));
    assert_eq!(cursor.offset(), PagePoint::new(TOOLTIP_OFFSET.0, TOOLTIP_OFFSET.1));

    events.emit(PagePoint::new(100.0, 40.0));
    assert_eq!(cursor.position(), Some(PagePoint::new(112.0, 56.0)));
}

#[test]
fn stick_cursor_holds_its_listener_until_dropped() {
    let events = PointerEvents::new();
    let cursor = StickCursor::new(MousePosition::track(&events));
    assert_eq!(events.listener_count(), 1);
    drop(cursor);
    assert_eq!(events.listener_count(), 0);
}

#[test]
fn stick_cursor_renders_children_at_offset_position() {
    let events = PointerEvents::new();
    let cursor = StickCursor::new(MousePosition::track(&events));
    events.emit(PagePoint::new(5.5, 7.0));

    let html = crate::render::to_html(|| cursor.render(Box::new(|| view! { <b>"x"</b> }.into_any())));
    assert!(html.contains(r#"class="stick-cursor""#));
    assert!(html.contains("position:absolute;left:17.5px;top:23px;pointer-events:none"));
    assert!(html.contains("<b>x</b>"));
}

#[test]
fn stick_cursor_renders_nothing_before_first_move() {
    let events = PointerEvents::new();
    let cursor = StickCursor::new(MousePosition::track(&events));
    let html = crate::render::to_html(|| cursor.render(Box::new(|| view! { <b>"x"</b> }.into_any())));
    assert!(!html.contains("stick-cursor"));
}
