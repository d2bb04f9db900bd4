//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use player_overlay::config::OverlaySettings;
use player_overlay::controller::OverlayController;
use player_overlay::document::Document;
use player_overlay::geometry::Rect;
use player_overlay::panel::{PanelKey, PanelRegistry};
use player_overlay::sleep::{SleepTracker, DEFAULT_IDLE_TIMEOUT};
use player_overlay::view::Surface;

pub type TestController = OverlayController<OverlaySettings, SleepTracker>;

/// A mounted controller with the document it listens on
pub struct Harness {
    pub controller: TestController,
    pub document: Document,
    pub t0: Instant,
}

impl Harness {
    /// Time `ms` milliseconds after mount
    pub fn at(&self, ms: u64) -> Instant {
        self.t0 + Duration::from_millis(ms)
    }
}

/// Mount the built-in panels over in-memory settings
pub fn mount(settings: OverlaySettings) -> Harness {
    let t0 = Instant::now();
    let mut document = Document::new();
    let controller = OverlayController::mount(
        PanelRegistry::with_defaults(),
        settings,
        SleepTracker::new(t0, DEFAULT_IDLE_TIMEOUT),
        &mut document,
    );
    Harness {
        controller,
        document,
        t0,
    }
}

pub fn mount_default() -> Harness {
    mount(OverlaySettings::default())
}

/// Settings with `opened_menu` already persisted
pub fn settings_with_open(key: &str) -> OverlaySettings {
    OverlaySettings {
        opened_menu: key.to_string(),
        ..Default::default()
    }
}

/// Hand-built geometry standing in for a rendered overlay
#[derive(Debug, Clone, Default)]
pub struct FakeSurface {
    pub container: Option<Rect>,
    pub buttons: Vec<(PanelKey, Rect)>,
    pub panel: Option<(PanelKey, Rect)>,
    pub cluster: Option<Rect>,
}

impl FakeSurface {
    /// 1000x800 container at the origin with both built-in buttons
    pub fn standard() -> Self {
        Self {
            container: Some(Rect::new(0.0, 0.0, 1000.0, 800.0)),
            buttons: vec![
                (PanelKey::WELCOME, Rect::new(28.0, 44.0, 48.0, 48.0)),
                (PanelKey::SETTINGS, Rect::new(28.0, 100.0, 48.0, 36.0)),
            ],
            panel: None,
            cluster: Some(Rect::new(20.0, 20.0, 64.0, 132.0)),
        }
    }

    pub fn with_button(mut self, key: PanelKey, rect: Rect) -> Self {
        self.buttons.retain(|(k, _)| k != &key);
        self.buttons.push((key, rect));
        self
    }

    pub fn with_panel(mut self, key: PanelKey, rect: Rect) -> Self {
        self.panel = Some((key, rect));
        self
    }

    pub fn without_container(mut self) -> Self {
        self.container = None;
        self
    }
}

impl Surface for FakeSurface {
    fn container_rect(&self) -> Option<Rect> {
        self.container
    }

    fn button_rect(&self, key: &PanelKey) -> Option<Rect> {
        self.buttons
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, rect)| *rect)
    }

    fn panel_rect(&self, key: &PanelKey) -> Option<Rect> {
        self.panel
            .as_ref()
            .filter(|(k, _)| k == key)
            .map(|(_, rect)| *rect)
    }

    fn cluster_rect(&self) -> Option<Rect> {
        self.cluster
    }
}
