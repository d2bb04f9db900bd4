//! Extension settings panel
//!
//! Shows the settings store's boolean flags as switches. Values are pulled
//! from the store whenever it changes.

use crate::config::SettingsStore;
use crate::geometry::{Rect, Size};
use crate::panel::PanelContent;
use crate::theme::OverlayTheme;
use crate::view::frame::Frame;

use super::{paint_card, CARD_MIN_HEIGHT, CARD_MIN_WIDTH, CARD_PADDING, TITLE_HEIGHT};

const TOGGLE_ROW_HEIGHT: f32 = 40.0;
const SWITCH_WIDTH: f32 = 36.0;
const SWITCH_HEIGHT: f32 = 20.0;
const LABEL_GLYPH_WIDTH: f32 = 8.0;

/// One labelled switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone)]
pub struct SettingsForm {
    toggles: Vec<Toggle>,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            toggles: vec![
                Toggle {
                    label: "Disable chat popup",
                    enabled: false,
                },
                Toggle {
                    label: "Disable overlay hiding",
                    enabled: false,
                },
            ],
        }
    }
}

impl SettingsForm {
    pub fn from_settings(settings: &dyn SettingsStore) -> Self {
        let mut form = Self::default();
        form.sync_settings(settings);
        form
    }

    pub fn toggles(&self) -> &[Toggle] {
        &self.toggles
    }
}

impl PanelContent for SettingsForm {
    fn preferred_size(&self) -> Size {
        let rows = self.toggles.len() as f32 * TOGGLE_ROW_HEIGHT;
        let height = 2.0 * CARD_PADDING + TITLE_HEIGHT + rows;
        Size::new(CARD_MIN_WIDTH, height.max(CARD_MIN_HEIGHT))
    }

    fn paint(&self, frame: &mut Frame<'_>, bounds: Rect, theme: &OverlayTheme) {
        let body = paint_card(frame, bounds, "Extension Settings", theme);

        for (i, toggle) in self.toggles.iter().enumerate() {
            let y = body.y + i as f32 * TOGGLE_ROW_HEIGHT;
            let label_width = (toggle.label.len() as f32 * LABEL_GLYPH_WIDTH)
                .min(body.width - SWITCH_WIDTH - 16.0)
                .max(0.0);
            frame.fill_rect(
                Rect::new(body.x, y + 16.0, label_width, 8.0),
                theme.panel_title.to_argb_u32(),
            );

            let track = Rect::new(
                body.right() - SWITCH_WIDTH,
                y + (TOGGLE_ROW_HEIGHT - SWITCH_HEIGHT) / 2.0,
                SWITCH_WIDTH,
                SWITCH_HEIGHT,
            );
            let color = if toggle.enabled {
                theme.toggle_on
            } else {
                theme.toggle_off
            };
            frame.fill_rect(track, color.to_argb_u32());

            let knob_x = if toggle.enabled {
                track.right() - SWITCH_HEIGHT + 2.0
            } else {
                track.x + 2.0
            };
            frame.fill_rect(
                Rect::new(knob_x, track.y + 2.0, SWITCH_HEIGHT - 4.0, SWITCH_HEIGHT - 4.0),
                theme.icon.to_argb_u32(),
            );
        }
    }

    fn sync_settings(&mut self, settings: &dyn SettingsStore) {
        let values = [settings.disable_chat_popup(), settings.disable_overlay_hiding()];
        for (toggle, value) in self.toggles.iter_mut().zip(values) {
            toggle.enabled = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OverlaySettings;

    #[test]
    fn test_reflects_settings() {
        let settings = OverlaySettings {
            disable_chat_popup: true,
            ..Default::default()
        };
        let form = SettingsForm::from_settings(&settings);

        let enabled: Vec<_> = form.toggles().iter().map(|t| t.enabled).collect();
        assert_eq!(enabled, vec![true, false]);
    }

    #[test]
    fn test_sync_picks_up_changes() {
        let mut settings = OverlaySettings::default();
        let mut form = SettingsForm::from_settings(&settings);

        settings.disable_overlay_hiding = true;
        form.sync_settings(&settings);

        assert!(form.toggles()[1].enabled);
    }

    #[test]
    fn test_preferred_size() {
        let size = SettingsForm::default().preferred_size();
        assert_eq!(size.width, CARD_MIN_WIDTH);
        assert_eq!(size.height, 2.0 * CARD_PADDING + TITLE_HEIGHT + 80.0);
    }
}
