//! Panel registry
//!
//! Ordered list of panel descriptors. The registry decides which keys are
//! valid; the controller, placement and drag logic never special-case a key
//! except for the command-triggered welcome panel.

use std::fmt;

use crate::config::SettingsStore;
use crate::geometry::{Point, Rect, Size};
use crate::panels::{OptionsTable, SettingsForm};
use crate::theme::OverlayTheme;
use crate::view::frame::Frame;

use super::{PanelIcon, PanelKey, PanelKind};

/// Renderable content of a panel
///
/// Opaque to the controller. The layout pass asks for the preferred size
/// when the panel becomes visible; the measured size is then cached.
pub trait PanelContent {
    /// Size the content wants to be drawn at
    fn preferred_size(&self) -> Size;

    /// Paint the content into `bounds`
    fn paint(&self, frame: &mut Frame<'_>, bounds: Rect, theme: &OverlayTheme);

    /// Pointer click inside the panel. Returns true if the content changed.
    fn click(&mut self, _bounds: Rect, _point: Point) -> bool {
        false
    }

    /// Wheel movement over the panel, positive scrolls down. Returns true if
    /// the content moved.
    fn scroll(&mut self, _bounds: Rect, _point: Point, _delta_y: f32) -> bool {
        false
    }

    /// Settings store values changed
    fn sync_settings(&mut self, _settings: &dyn SettingsStore) {}
}

/// Immutable registry entry
pub struct PanelDescriptor {
    pub key: PanelKey,
    pub kind: PanelKind,
    /// Shown as the button's accessible label
    pub title: &'static str,
    pub icon: PanelIcon,
    pub content: Box<dyn PanelContent>,
}

impl fmt::Debug for PanelDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelDescriptor")
            .field("key", &self.key)
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

/// Ordered set of panels, one trigger button each
#[derive(Debug, Default)]
pub struct PanelRegistry {
    entries: Vec<PanelDescriptor>,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in panels: the welcome options list and extension settings
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(PanelDescriptor {
            key: PanelKey::WELCOME,
            kind: PanelKind::Primary,
            title: "Options",
            icon: PanelIcon::Welcome,
            content: Box::new(OptionsTable::welcome()),
        });
        registry.register(PanelDescriptor {
            key: PanelKey::SETTINGS,
            kind: PanelKind::Secondary,
            title: "Extension Settings",
            icon: PanelIcon::Settings,
            content: Box::new(SettingsForm::default()),
        });
        registry
    }

    /// Append a panel. A key that is already registered is replaced in place.
    pub fn register(&mut self, descriptor: PanelDescriptor) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.key == descriptor.key) {
            tracing::debug!(key = %descriptor.key, "Replacing registered panel");
            *existing = descriptor;
        } else {
            self.entries.push(descriptor);
        }
    }

    pub fn contains(&self, key: &PanelKey) -> bool {
        self.entries.iter().any(|e| &e.key == key)
    }

    /// Keep a key only if it is registered
    pub fn validate(&self, key: Option<PanelKey>) -> Option<PanelKey> {
        key.filter(|k| self.contains(k))
    }

    pub fn get(&self, key: &PanelKey) -> Option<&PanelDescriptor> {
        self.entries.iter().find(|e| &e.key == key)
    }

    pub fn get_mut(&mut self, key: &PanelKey) -> Option<&mut PanelDescriptor> {
        self.entries.iter_mut().find(|e| &e.key == key)
    }

    /// Push current settings values into every panel's content
    pub fn sync_settings(&mut self, settings: &dyn SettingsStore) {
        for entry in &mut self.entries {
            entry.content.sync_settings(settings);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PanelDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
