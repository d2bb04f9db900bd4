//! Overlay colors
//!
//! A single built-in dark palette. Colors are stored as RGBA and converted
//! to ARGB for the software framebuffer.

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Return a new color with the specified alpha value
    pub const fn with_alpha(&self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

}

/// Resolved overlay palette
#[derive(Debug, Clone)]
pub struct OverlayTheme {
    /// Stand-in for the video surface behind the overlay
    pub player_background: Color,
    /// Button cluster backdrop (semi-transparent)
    pub cluster_background: Color,
    /// Drag handle strip on top of the cluster
    pub drag_handle: Color,
    pub button: Color,
    /// Button whose panel is open
    pub button_pressed: Color,
    pub button_hover: Color,
    pub icon: Color,
    /// Panel card background (semi-transparent)
    pub panel_background: Color,
    pub panel_border: Color,
    pub panel_title: Color,
    /// Table row fill
    pub row: Color,
    pub row_divider: Color,
    pub toggle_on: Color,
    pub toggle_off: Color,
}

impl OverlayTheme {
    /// Default overlay theme (dark)
    pub fn default_dark() -> Self {
        Self {
            player_background: Color::rgb(0x0E, 0x0E, 0x10),
            cluster_background: Color::rgba(0x18, 0x18, 0x1B, 0xC0),
            drag_handle: Color::rgb(0x53, 0x53, 0x5F),
            button: Color::rgb(0x2B, 0x2D, 0x30),
            button_pressed: Color::rgba(0x26, 0x4F, 0x78, 0xFF),
            button_hover: Color::rgb(0x3C, 0x3F, 0x41),
            icon: Color::rgb(0xE0, 0xE0, 0xE0),
            panel_background: Color::rgba(0x00, 0x00, 0x00, 0xE6),
            panel_border: Color::rgb(0x37, 0x41, 0x51),
            panel_title: Color::rgb(0xE0, 0xE0, 0xE0),
            row: Color::rgb(0x1F, 0x29, 0x37),
            row_divider: Color::rgb(0x37, 0x41, 0x51),
            toggle_on: Color::rgb(0x80, 0xFF, 0x80),
            toggle_off: Color::rgb(0x6B, 0x72, 0x80),
        }
    }
}

impl Default for OverlayTheme {
    fn default() -> Self {
        Self::default_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_argb() {
        assert_eq!(Color::rgb(0x11, 0x22, 0x33).to_argb_u32(), 0xFF112233);
        assert_eq!(
            Color::rgb(0x11, 0x22, 0x33).with_alpha(0x80).to_argb_u32(),
            0x80112233
        );
    }
}
