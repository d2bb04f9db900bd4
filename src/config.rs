//! Overlay settings persistence
//!
//! Stores user preferences in `~/.config/player-overlay/settings.yaml`.
//! The controller reads and writes settings through the [`SettingsStore`]
//! trait; [`SettingsFile`] is the on-disk implementation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::panel::PanelKey;

/// Key/value access the overlay needs from its settings store
pub trait SettingsStore {
    /// Persisted active panel (`None` when closed)
    fn opened_menu(&self) -> Option<PanelKey>;

    /// Persist the active panel
    fn set_opened_menu(&mut self, key: Option<PanelKey>);

    /// Ignore chat commands entirely
    fn disable_chat_popup(&self) -> bool;

    /// Keep the overlay visible while sleeping (honored in debug builds only)
    fn disable_overlay_hiding(&self) -> bool;
}

/// Overlay configuration that persists across sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlaySettings {
    /// Key of the open panel; empty when none is open
    #[serde(default)]
    pub opened_menu: String,
    /// Do not open the welcome panel for chat commands
    #[serde(default)]
    pub disable_chat_popup: bool,
    /// Development override: never hide the overlay while sleeping
    #[serde(default)]
    pub disable_overlay_hiding: bool,
}

impl OverlaySettings {
    /// Load settings from `path`, or return defaults if missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Settings file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(settings) => {
                    tracing::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    tracing::warn!("Failed to parse settings at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create settings directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write settings to {}: {}", path.display(), e))?;

        tracing::debug!("Saved settings to {}", path.display());
        Ok(())
    }
}

/// In-memory store, nothing is persisted
impl SettingsStore for OverlaySettings {
    fn opened_menu(&self) -> Option<PanelKey> {
        PanelKey::parse(&self.opened_menu)
    }

    fn set_opened_menu(&mut self, key: Option<PanelKey>) {
        self.opened_menu = PanelKey::to_persisted(key.as_ref());
    }

    fn disable_chat_popup(&self) -> bool {
        self.disable_chat_popup
    }

    fn disable_overlay_hiding(&self) -> bool {
        self.disable_overlay_hiding
    }
}

/// Settings backed by a YAML file, saved on every opened-menu change
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: Option<PathBuf>,
    settings: OverlaySettings,
}

impl SettingsFile {
    /// Load from the default location (`~/.config/player-overlay/settings.yaml`)
    pub fn load() -> Self {
        match crate::config_paths::settings_file() {
            Some(path) => Self::open(path),
            None => {
                tracing::debug!("No config directory available, settings will not persist");
                Self {
                    path: None,
                    settings: OverlaySettings::default(),
                }
            }
        }
    }

    /// Load from an explicit path
    pub fn open(path: PathBuf) -> Self {
        let settings = OverlaySettings::load_from(&path);
        Self {
            path: Some(path),
            settings,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn settings(&self) -> &OverlaySettings {
        &self.settings
    }

    /// Re-read the file after an external edit.
    ///
    /// Returns true if anything changed.
    pub fn reload(&mut self) -> bool {
        let Some(path) = &self.path else {
            return false;
        };
        let fresh = OverlaySettings::load_from(path);
        if fresh == self.settings {
            return false;
        }
        self.settings = fresh;
        true
    }

    pub fn save(&self) -> Result<(), String> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| "No settings file available".to_string())?;
        self.settings.save_to(path)
    }
}

impl SettingsStore for SettingsFile {
    fn opened_menu(&self) -> Option<PanelKey> {
        self.settings.opened_menu()
    }

    fn set_opened_menu(&mut self, key: Option<PanelKey>) {
        self.settings.set_opened_menu(key);
        if self.path.is_none() {
            return;
        }
        if let Err(e) = self.save() {
            tracing::warn!("Failed to persist opened menu: {}", e);
        }
    }

    fn disable_chat_popup(&self) -> bool {
        self.settings.disable_chat_popup
    }

    fn disable_overlay_hiding(&self) -> bool {
        self.settings.disable_overlay_hiding
    }
}
