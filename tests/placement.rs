//! Panel placement through the controller
//!
//! Positions are computed from the clicked button and the container at
//! click time, using measured panel sizes once a panel has been laid out.

mod common;

use common::{mount_default, FakeSurface};
use player_overlay::geometry::{PanelPosition, Rect};
use player_overlay::panel::PanelKey;

#[test]
fn test_open_near_right_edge_places_left_and_clamps_top() {
    let mut h = mount_default();
    let surface =
        FakeSurface::standard().with_button(PanelKey::WELCOME, Rect::new(900.0, 100.0, 40.0, 40.0));

    assert!(h.controller.click(&PanelKey::WELCOME, &surface, h.at(0)));

    assert_eq!(h.controller.active(), Some(&PanelKey::WELCOME));
    assert_eq!(
        h.controller.position(&PanelKey::WELCOME),
        PanelPosition::new(460.0, 20.0)
    );
}

#[test]
fn test_fit_check_is_inclusive() {
    let mut h = mount_default();
    // 520 + 40 + 40 + 400 == 1000
    let surface =
        FakeSurface::standard().with_button(PanelKey::WELCOME, Rect::new(520.0, 400.0, 40.0, 40.0));

    h.controller.click(&PanelKey::WELCOME, &surface, h.at(0));

    assert_eq!(
        h.controller.position(&PanelKey::WELCOME),
        PanelPosition::new(600.0, 270.0)
    );
}

#[test]
fn test_container_offset_is_subtracted() {
    let mut h = mount_default();
    let mut surface =
        FakeSurface::standard().with_button(PanelKey::SETTINGS, Rect::new(150.0, 400.0, 40.0, 40.0));
    surface.container = Some(Rect::new(100.0, 50.0, 1000.0, 800.0));

    h.controller.click(&PanelKey::SETTINGS, &surface, h.at(0));

    assert_eq!(
        h.controller.position(&PanelKey::SETTINGS),
        PanelPosition::new(130.0, 220.0)
    );
}

#[test]
fn test_measured_size_drives_later_placement() {
    let mut h = mount_default();
    let button = Rect::new(460.0, 400.0, 40.0, 40.0);
    let surface = FakeSurface::standard()
        .with_button(PanelKey::WELCOME, button)
        .with_panel(PanelKey::WELCOME, Rect::new(540.0, 270.0, 512.0, 228.0));

    // Unmeasured: the 400px default fits on the right
    h.controller.click(&PanelKey::WELCOME, &surface, h.at(0));
    assert_eq!(h.controller.position(&PanelKey::WELCOME).x, 540.0);

    h.controller.measure_active(&surface);
    h.controller.click(&PanelKey::WELCOME, &surface, h.at(10));
    assert_eq!(h.controller.active(), None);

    // 500 + 40 + 512 > 1000: left side, clamped
    h.controller.click(&PanelKey::WELCOME, &surface, h.at(20));
    assert_eq!(
        h.controller.position(&PanelKey::WELCOME),
        PanelPosition::new(20.0, 270.0)
    );
}

#[test]
fn test_first_measurement_wins() {
    let mut h = mount_default();
    let surface = FakeSurface::standard()
        .with_panel(PanelKey::SETTINGS, Rect::new(0.0, 0.0, 400.0, 164.0));
    h.controller.click(&PanelKey::SETTINGS, &surface, h.at(0));
    h.controller.measure_active(&surface);

    let resized = surface
        .clone()
        .with_panel(PanelKey::SETTINGS, Rect::new(0.0, 0.0, 900.0, 900.0));
    h.controller.measure_active(&resized);

    let cached = h.controller.state().dimensions.get(&PanelKey::SETTINGS);
    assert_eq!(cached.map(|d| d.width), Some(400.0));
    assert_eq!(cached.map(|d| d.height), Some(164.0));
}

#[test]
fn test_missing_container_drops_click() {
    let mut h = mount_default();
    let surface = FakeSurface::standard().without_container();

    assert!(!h.controller.click(&PanelKey::WELCOME, &surface, h.at(0)));
    assert_eq!(h.controller.active(), None);
}

#[test]
fn test_missing_button_drops_click() {
    let mut h = mount_default();
    let mut surface = FakeSurface::standard();
    surface.buttons.clear();

    assert!(!h.controller.click(&PanelKey::SETTINGS, &surface, h.at(0)));
    assert_eq!(h.controller.active(), None);
}

#[test]
fn test_unopened_panel_reports_default_position() {
    let h = mount_default();
    assert_eq!(
        h.controller.position(&PanelKey::SETTINGS),
        PanelPosition::new(20.0, 20.0)
    );
}

#[test]
fn test_command_open_reuses_last_click_position() {
    let mut h = mount_default();
    let surface =
        FakeSurface::standard().with_button(PanelKey::WELCOME, Rect::new(900.0, 100.0, 40.0, 40.0));

    h.controller.click(&PanelKey::WELCOME, &surface, h.at(0));
    h.controller.click(&PanelKey::WELCOME, &surface, h.at(10));
    assert_eq!(h.controller.active(), None);

    h.controller.chat_command("welcome", h.at(20));

    assert_eq!(h.controller.active(), Some(&PanelKey::WELCOME));
    assert_eq!(
        h.controller.position(&PanelKey::WELCOME),
        PanelPosition::new(460.0, 20.0)
    );
}
