//! Player overlay - Elm-style floating control overlay
//!
//! This crate provides the core types and logic for a draggable button
//! cluster that toggles one panel at a time over a video player surface,
//! implementing the Elm Architecture pattern.

pub mod chat;
pub mod cli;
pub mod click_guard;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod controller;
pub mod document;
pub mod geometry;
pub mod messages;
pub mod model;
pub mod panel;
pub mod panels;
pub mod settings_watcher;
pub mod sleep;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::{OverlaySettings, SettingsFile, SettingsStore};
pub use controller::OverlayController;
pub use messages::Msg;
pub use model::OverlayState;
pub use panel::{PanelKey, PanelRegistry};
pub use theme::OverlayTheme;
