//! Document-level click guard tests
//!
//! Events go through `Document::dispatch` the way the runtime delivers
//! them: capture listeners first, then the target if propagation was not
//! stopped.

mod common;

use std::time::Instant;

use common::{mount, settings_with_open, Harness};
use player_overlay::document::{Document, PointerEvent, PointerKind};
use player_overlay::model::Visibility;
use player_overlay::panel::{PanelKey, PanelRegistry};
use player_overlay::sleep::{SleepTracker, DEFAULT_IDLE_TIMEOUT};
use player_overlay::OverlayController;

fn inside(_: &PointerEvent) -> bool {
    true
}

fn outside(_: &PointerEvent) -> bool {
    false
}

/// Deliver `event`; returns whether it reached its target
fn deliver(
    h: &mut Harness,
    mut event: PointerEvent,
    hit: fn(&PointerEvent) -> bool,
    now: Instant,
) -> bool {
    let Harness {
        controller,
        document,
        ..
    } = h;
    document.dispatch(&mut event, |_, e| {
        controller.capture(e, &hit, now);
    })
}

#[test]
fn test_outside_click_closes_active_panel() {
    let mut h = mount(settings_with_open("welcome"));
    let now = h.at(0);

    assert!(deliver(&mut h, PointerEvent::click(900.0, 700.0), outside, now));

    assert_eq!(h.controller.visibility(), Visibility::Closed);
    assert_eq!(h.controller.settings().opened_menu, "");
}

#[test]
fn test_click_inside_overlay_keeps_panel() {
    let mut h = mount(settings_with_open("settings"));
    let now = h.at(0);

    assert!(deliver(&mut h, PointerEvent::click(40.0, 40.0), inside, now));

    assert_eq!(h.controller.active(), Some(&PanelKey::SETTINGS));
}

#[test]
fn test_double_click_inside_overlay_is_suppressed() {
    let mut h = mount(settings_with_open("welcome"));
    let now = h.at(0);

    let reached = deliver(&mut h, PointerEvent::double_click(40.0, 40.0), inside, now);

    assert!(!reached);
    assert_eq!(h.controller.active(), Some(&PanelKey::WELCOME));
}

#[test]
fn test_double_click_outside_reaches_the_player() {
    let mut h = mount(settings_with_open("welcome"));
    let now = h.at(0);

    assert!(deliver(&mut h, PointerEvent::double_click(900.0, 700.0), outside, now));
    // Only clicks dismiss
    assert_eq!(h.controller.active(), Some(&PanelKey::WELCOME));
}

#[test]
fn test_outside_click_while_closed_changes_nothing() {
    let mut h = mount(Default::default());
    let now = h.at(0);

    deliver(&mut h, PointerEvent::click(900.0, 700.0), outside, now);

    assert_eq!(h.controller.visibility(), Visibility::Closed);
}

#[test]
fn test_unmount_removes_listeners() {
    let mut h = mount(settings_with_open("welcome"));
    assert_eq!(h.document.listener_count(), 2);

    h.controller.unmount(&mut h.document);
    assert_eq!(h.document.listener_count(), 0);

    // Nothing captures anymore: the double click goes straight through
    let now = h.at(0);
    assert!(deliver(&mut h, PointerEvent::double_click(40.0, 40.0), inside, now));
    assert!(deliver(&mut h, PointerEvent::click(900.0, 700.0), outside, now));
    assert_eq!(h.controller.active(), Some(&PanelKey::WELCOME));
}

#[test]
fn test_remount_installs_fresh_listeners() {
    let mut h = mount(Default::default());
    h.controller.unmount(&mut h.document);

    let mut document = Document::new();
    let remounted = OverlayController::mount(
        PanelRegistry::with_defaults(),
        h.controller.settings().clone(),
        SleepTracker::new(h.t0, DEFAULT_IDLE_TIMEOUT),
        &mut document,
    );

    assert!(remounted.is_mounted());
    assert_eq!(document.listener_count(), 2);
    assert!(document.listens_for(PointerKind::DoubleClick));
}
