//! Geometry primitives and panel placement
//!
//! All functions here are pure (no I/O, no side effects). Coordinates are in
//! physical pixels; panel positions are relative to the overlay container.

// ============================================================================
// Placement Constants
// ============================================================================

/// Horizontal gap between a trigger button and the panel it opens
pub const PANEL_GAP: f32 = 40.0;

/// Assumed half-height of a panel when centering it on its trigger.
/// Placement uses this constant, never the measured panel height.
pub const PANEL_HALF_HEIGHT: f32 = 150.0;

/// Minimum distance from the container's top/left edges
pub const EDGE_MARGIN: f32 = 20.0;

/// Size used for a panel that has never been measured
pub const DEFAULT_PANEL_SIZE: Size = Size {
    width: 400.0,
    height: 300.0,
};

// ============================================================================
// Core Types
// ============================================================================

/// A point in window coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset between two points (`self - origin`)
    pub fn delta_from(&self, origin: Point) -> (f32, f32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Width and height of a rendered element
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Bounding box snapshot of a rendered element
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.contains(point.x, point.y)
    }
}

/// Container-relative coordinates of a panel's top-left corner
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelPosition {
    pub x: f32,
    pub y: f32,
}

impl PanelPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for PanelPosition {
    /// Where a panel sits before it has ever been opened by a click
    fn default() -> Self {
        Self {
            x: EDGE_MARGIN,
            y: EDGE_MARGIN,
        }
    }
}

/// Measured width/height of a panel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelDimension {
    pub width: f32,
    pub height: f32,
}

impl PanelDimension {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Size to place with. A zero (or negative) axis falls back to the default.
    pub fn effective_size(&self) -> Size {
        Size {
            width: if self.width > 0.0 {
                self.width
            } else {
                DEFAULT_PANEL_SIZE.width
            },
            height: if self.height > 0.0 {
                self.height
            } else {
                DEFAULT_PANEL_SIZE.height
            },
        }
    }
}

impl From<Rect> for PanelDimension {
    fn from(rect: Rect) -> Self {
        Self::new(rect.width, rect.height)
    }
}

// ============================================================================
// Placement
// ============================================================================

/// Compute where a panel opened from `button` should be drawn inside `container`.
///
/// The panel goes to the right of the button when it fits (the fit check is
/// inclusive), otherwise to the left. Vertically it is centered on the button
/// using [`PANEL_HALF_HEIGHT`]. The result is clamped to [`EDGE_MARGIN`] on the
/// top/left only; there is no clamp against the right or bottom edges.
///
/// The left-side offset subtracts the button's own width as well as the
/// panel width.
pub fn place(button: Rect, container: Rect, panel: Option<PanelDimension>) -> PanelPosition {
    let size = panel
        .map(|d| d.effective_size())
        .unwrap_or(DEFAULT_PANEL_SIZE);

    let x = if button.right() + PANEL_GAP + size.width <= container.right() {
        button.right() + PANEL_GAP - container.left()
    } else {
        button.left() - button.width - size.width - container.left()
    };

    let y = button.top() + button.height / 2.0 - PANEL_HALF_HEIGHT - container.top();

    PanelPosition {
        x: x.max(EDGE_MARGIN),
        y: y.max(EDGE_MARGIN),
    }
}

/// Clamp a cluster origin so a box of `size` stays inside `bounds`.
///
/// Both the origin and the result are relative to `bounds`. When the box is
/// larger than the bounds the origin pins to zero.
pub fn clamp_within(origin: Point, size: Size, bounds: Rect) -> Point {
    let max_x = (bounds.width - size.width).max(0.0);
    let max_y = (bounds.height - size.height).max(0.0);
    Point {
        x: origin.x.clamp(0.0, max_x),
        y: origin.y.clamp(0.0, max_y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_right_side_when_it_fits() {
        let button = Rect::new(100.0, 300.0, 40.0, 40.0);
        let container = Rect::new(0.0, 0.0, 1000.0, 800.0);

        let pos = place(button, container, None);

        assert_eq!(pos.x, 180.0);
        assert_eq!(pos.y, 300.0 + 20.0 - 150.0);
    }

    #[test]
    fn test_place_left_side_subtracts_button_width() {
        let button = Rect::new(900.0, 100.0, 40.0, 40.0);
        let container = Rect::new(0.0, 0.0, 1000.0, 800.0);

        let pos = place(button, container, None);

        assert_eq!(pos, PanelPosition::new(460.0, 20.0));
    }

    #[test]
    fn test_place_exact_fit_picks_right_side() {
        // 500 + 40 + 460 == 1000
        let button = Rect::new(460.0, 400.0, 40.0, 40.0);
        let container = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let measured = PanelDimension::new(460.0, 200.0);

        let pos = place(button, container, Some(measured));

        assert_eq!(pos.x, 540.0);
    }

    #[test]
    fn test_place_one_pixel_over_picks_left_side() {
        let button = Rect::new(460.0, 400.0, 40.0, 40.0);
        let container = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let measured = PanelDimension::new(461.0, 200.0);

        let pos = place(button, container, Some(measured));

        // 460 - 40 - 461 is negative, so the left edge clamps
        assert_eq!(pos.x, EDGE_MARGIN);
    }

    #[test]
    fn test_place_is_container_relative() {
        let button = Rect::new(150.0, 400.0, 40.0, 40.0);
        let container = Rect::new(50.0, 30.0, 1000.0, 800.0);

        let pos = place(button, container, None);

        assert_eq!(pos.x, 190.0 + 40.0 - 50.0);
        assert_eq!(pos.y, 400.0 + 20.0 - 150.0 - 30.0);
    }

    #[test]
    fn test_place_ignores_measured_height() {
        let button = Rect::new(100.0, 500.0, 40.0, 40.0);
        let container = Rect::new(0.0, 0.0, 1000.0, 800.0);

        let short = place(button, container, Some(PanelDimension::new(400.0, 50.0)));
        let tall = place(button, container, Some(PanelDimension::new(400.0, 700.0)));

        assert_eq!(short.y, tall.y);
    }

    #[test]
    fn test_zero_dimension_falls_back_to_default() {
        let dim = PanelDimension::new(0.0, 120.0);
        assert_eq!(dim.effective_size(), Size::new(400.0, 120.0));
    }

    #[test]
    fn test_clamp_within_pins_to_bounds() {
        let bounds = Rect::new(0.0, 0.0, 800.0, 600.0);
        let size = Size::new(60.0, 120.0);

        assert_eq!(
            clamp_within(Point::new(-10.0, 700.0), size, bounds),
            Point::new(0.0, 480.0)
        );
        assert_eq!(
            clamp_within(Point::new(100.0, 100.0), size, bounds),
            Point::new(100.0, 100.0)
        );
    }
}
