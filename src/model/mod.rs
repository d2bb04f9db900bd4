//! Overlay model - the complete state of the overlay
//!
//! This module contains the state types following the Elm Architecture
//! pattern. All mutation happens in [`crate::update`].

pub mod dimensions;
pub mod drag;
pub mod timer;

pub use dimensions::DimensionCache;
pub use drag::{DragContainer, DragUpdate, DEFAULT_CLUSTER_POSITION};
pub use timer::{TimerHandle, TimerService};

use std::collections::HashMap;

use crate::geometry::{PanelPosition, Point};
use crate::messages::Msg;
use crate::panel::PanelKey;

/// Which panel, if any, is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visibility {
    Closed,
    Open(PanelKey),
}

/// The complete overlay state for one mount
#[derive(Debug, Clone)]
pub struct OverlayState {
    /// Currently open panel (`None` when closed)
    pub active: Option<PanelKey>,
    /// Last click-computed position of each panel
    pub positions: HashMap<PanelKey, PanelPosition>,
    /// Sizes measured after a panel's first visible layout
    pub dimensions: DimensionCache,
    /// Button cluster position and drag gesture state
    pub drag: DragContainer,
    /// Auto-dismiss timer armed by chat commands
    pub dismissal: TimerService<Msg>,
    /// Set when a command requested a wake, so the wake it causes is ignored
    pub awaking: bool,
}

impl OverlayState {
    /// Fresh state seeded with the persisted active panel
    pub fn new(active: Option<PanelKey>) -> Self {
        Self {
            active,
            positions: HashMap::new(),
            dimensions: DimensionCache::new(),
            drag: DragContainer::default(),
            dismissal: TimerService::new(),
            awaking: false,
        }
    }

    pub fn visibility(&self) -> Visibility {
        match &self.active {
            Some(key) => Visibility::Open(key.clone()),
            None => Visibility::Closed,
        }
    }

    pub fn is_open(&self, key: &PanelKey) -> bool {
        self.active.as_ref() == Some(key)
    }

    /// Where `key` is drawn: its last click position, or the default corner
    pub fn position(&self, key: &PanelKey) -> PanelPosition {
        self.positions.get(key).copied().unwrap_or_default()
    }

    pub fn cluster_position(&self) -> Point {
        self.drag.position()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::new(None)
    }
}
