//! Panel system - keys, descriptors and the panel registry
//!
//! The overlay shows at most one panel at a time. Panels are identified by a
//! [`PanelKey`] and described once by a [`PanelDescriptor`] in the
//! [`PanelRegistry`]. The content of a panel is an opaque [`PanelContent`]
//! unit: the controller only knows its key, kind and title.
//!
//! ## Architecture
//!
//! - `PanelKey`: identifier for a registered panel (`None` means no panel)
//! - `PanelKind`: primary or secondary button styling
//! - `PanelIcon`: glyph painted on the panel's trigger button
//! - `PanelDescriptor`: immutable registry entry
//! - `PanelRegistry`: ordered list of descriptors, one trigger button each

mod registry;

pub use registry::{PanelContent, PanelDescriptor, PanelRegistry};

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a registered panel
///
/// "No panel" is expressed as `Option<PanelKey>::None`; it is persisted as the
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelKey(Cow<'static, str>);

impl PanelKey {
    /// The command-triggered welcome panel
    pub const WELCOME: PanelKey = PanelKey(Cow::Borrowed("welcome"));
    /// Extension settings
    pub const SETTINGS: PanelKey = PanelKey(Cow::Borrowed("settings"));

    pub fn new(key: impl Into<String>) -> Self {
        Self(Cow::Owned(key.into()))
    }

    /// Parse a persisted key; the empty string means no panel
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            None
        } else {
            Some(Self::new(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Persisted form of an optional key
    pub fn to_persisted(key: Option<&PanelKey>) -> String {
        key.map(|k| k.as_str().to_string()).unwrap_or_default()
    }
}

impl fmt::Display for PanelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Button styling for a panel's trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Primary,
    Secondary,
}

impl PanelKind {
    /// Edge length of the trigger button in pixels
    pub fn button_size(&self) -> f32 {
        match self {
            PanelKind::Primary => 44.0,
            PanelKind::Secondary => 40.0,
        }
    }
}

/// Glyph painted on a trigger button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelIcon {
    Welcome,
    Settings,
}
