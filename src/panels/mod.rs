//! Leaf panel contents
//!
//! Each panel is drawn as a card: a bordered, semi-transparent rectangle
//! with a title strip on top and the content body below.
//!
//! ## Available Panels
//!
//! - **OptionsTable**: id/name rows, used by the welcome panel
//! - **SettingsForm**: read-only view of the settings store toggles

mod options_table;
mod settings_form;

pub use options_table::{OptionsTable, TableRow};
pub use settings_form::{SettingsForm, Toggle};

use crate::geometry::Rect;
use crate::theme::OverlayTheme;
use crate::view::frame::Frame;

/// Preferred card width
pub const CARD_WIDTH: f32 = 512.0;
/// Narrowest card width
pub const CARD_MIN_WIDTH: f32 = 400.0;
/// Shortest card height
pub const CARD_MIN_HEIGHT: f32 = 100.0;
/// Inner padding on every side
pub const CARD_PADDING: f32 = 20.0;
/// Height of the title strip including its bottom margin
pub const TITLE_HEIGHT: f32 = 44.0;

/// Approximate advance of one title glyph, used for placeholder bars
const TITLE_GLYPH_WIDTH: f32 = 14.0;

/// Body area of a card drawn at `bounds`
pub fn card_body(bounds: Rect) -> Rect {
    Rect::new(
        bounds.x + CARD_PADDING,
        bounds.y + CARD_PADDING + TITLE_HEIGHT,
        (bounds.width - 2.0 * CARD_PADDING).max(0.0),
        (bounds.height - 2.0 * CARD_PADDING - TITLE_HEIGHT).max(0.0),
    )
}

/// Draw the card frame and its title placeholder, returning the body area
pub fn paint_card(frame: &mut Frame<'_>, bounds: Rect, title: &str, theme: &OverlayTheme) -> Rect {
    frame.draw_bordered_rect(
        bounds,
        theme.panel_background.to_argb_u32(),
        theme.panel_border.to_argb_u32(),
    );

    // No font rendering: a centered bar sized to the title stands in for it
    let inner = bounds.width - 2.0 * CARD_PADDING;
    let bar_width = (title.chars().count() as f32 * TITLE_GLYPH_WIDTH).min(inner);
    frame.fill_rect(
        Rect::new(
            bounds.x + (bounds.width - bar_width) / 2.0,
            bounds.y + CARD_PADDING + 8.0,
            bar_width,
            TITLE_HEIGHT - 24.0,
        ),
        theme.panel_title.to_argb_u32(),
    );

    card_body(bounds)
}
