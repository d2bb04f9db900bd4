//! Scene layout
//!
//! Computes where the button cluster, its buttons and the open panel sit in
//! window coordinates. The controller reads geometry back through the
//! [`Surface`] trait, so it never depends on this concrete layout.

use crate::geometry::{Point, Rect, Size};
use crate::model::OverlayState;
use crate::panel::{PanelIcon, PanelKey, PanelRegistry};

/// Padding between the cluster edge and its children
pub const CLUSTER_PADDING: f32 = 8.0;
/// Height of the drag handle strip
pub const DRAG_HANDLE_HEIGHT: f32 = 16.0;
/// Vertical gap between cluster children
pub const BUTTON_GAP: f32 = 8.0;

/// Rendered geometry the controller needs at event time
///
/// Every method may return `None` when the element is not laid out.
pub trait Surface {
    /// The positioning container panels are placed in
    fn container_rect(&self) -> Option<Rect>;

    /// Trigger button of `key`
    fn button_rect(&self, key: &PanelKey) -> Option<Rect>;

    /// Panel card of `key`, only while it is open
    fn panel_rect(&self, key: &PanelKey) -> Option<Rect>;

    /// The draggable button cluster
    fn cluster_rect(&self) -> Option<Rect>;
}

/// One laid-out trigger button
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonLayout {
    pub key: PanelKey,
    pub rect: Rect,
    /// Accessible label
    pub title: &'static str,
    pub icon: PanelIcon,
    /// The button's panel is open
    pub pressed: bool,
}

/// Full scene geometry for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLayout {
    pub container: Rect,
    pub cluster: Rect,
    pub drag_handle: Rect,
    pub buttons: Vec<ButtonLayout>,
    /// Open panel and its card bounds
    pub panel: Option<(PanelKey, Rect)>,
    /// False while the overlay is hidden for sleep
    pub visible: bool,
}

impl OverlayLayout {
    pub fn compute(
        container: Rect,
        state: &OverlayState,
        registry: &PanelRegistry,
        visible: bool,
    ) -> Self {
        let origin = state.cluster_position();
        let size = Self::cluster_size(registry);
        let cluster = Rect::new(
            container.x + origin.x,
            container.y + origin.y,
            size.width,
            size.height,
        );

        let inner_width = size.width - 2.0 * CLUSTER_PADDING;
        let drag_handle = Rect::new(
            cluster.x + CLUSTER_PADDING,
            cluster.y + CLUSTER_PADDING,
            inner_width,
            DRAG_HANDLE_HEIGHT,
        );

        let mut y = drag_handle.bottom() + BUTTON_GAP;
        let buttons = registry
            .iter()
            .map(|entry| {
                let height = entry.kind.button_size();
                let rect = Rect::new(drag_handle.x, y, inner_width, height);
                y += height + BUTTON_GAP;
                ButtonLayout {
                    key: entry.key.clone(),
                    rect,
                    title: entry.title,
                    icon: entry.icon,
                    pressed: state.is_open(&entry.key),
                }
            })
            .collect();

        // Positions are relative to the container
        let panel = state.active.as_ref().and_then(|key| {
            let entry = registry.get(key)?;
            let position = state.position(key);
            let rect = Rect::from_origin_size(
                Point::new(container.x + position.x, container.y + position.y),
                entry.content.preferred_size(),
            );
            Some((key.clone(), rect))
        });

        Self {
            container,
            cluster,
            drag_handle,
            buttons,
            panel,
            visible,
        }
    }

    /// Cluster size for a registry: single column, widest button wins
    pub fn cluster_size(registry: &PanelRegistry) -> Size {
        let widest = registry
            .iter()
            .map(|e| e.kind.button_size())
            .fold(0.0_f32, f32::max);
        let buttons: f32 = registry
            .iter()
            .map(|e| e.kind.button_size() + BUTTON_GAP)
            .sum();

        Size::new(
            widest + 2.0 * CLUSTER_PADDING,
            2.0 * CLUSTER_PADDING + DRAG_HANDLE_HEIGHT + buttons,
        )
    }

    pub fn button(&self, key: &PanelKey) -> Option<&ButtonLayout> {
        self.buttons.iter().find(|b| &b.key == key)
    }
}

impl Surface for OverlayLayout {
    fn container_rect(&self) -> Option<Rect> {
        (self.container.width > 0.0 && self.container.height > 0.0).then_some(self.container)
    }

    fn button_rect(&self, key: &PanelKey) -> Option<Rect> {
        self.button(key).map(|b| b.rect)
    }

    fn panel_rect(&self, key: &PanelKey) -> Option<Rect> {
        self.panel
            .as_ref()
            .filter(|(open, _)| open == key)
            .map(|(_, rect)| *rect)
    }

    fn cluster_rect(&self) -> Option<Rect> {
        Some(self.cluster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PanelPosition;
    use crate::panel::PanelKind;

    fn window() -> Rect {
        Rect::new(0.0, 0.0, 1280.0, 720.0)
    }

    #[test]
    fn test_cluster_size_for_defaults() {
        let registry = PanelRegistry::with_defaults();
        let size = OverlayLayout::cluster_size(&registry);

        let primary = PanelKind::Primary.button_size();
        let secondary = PanelKind::Secondary.button_size();
        assert_eq!(size.width, primary + 2.0 * CLUSTER_PADDING);
        assert_eq!(
            size.height,
            2.0 * CLUSTER_PADDING + DRAG_HANDLE_HEIGHT + primary + secondary + 2.0 * BUTTON_GAP
        );
    }

    #[test]
    fn test_buttons_stack_below_handle() {
        let registry = PanelRegistry::with_defaults();
        let layout = OverlayLayout::compute(window(), &OverlayState::default(), &registry, true);

        let welcome = layout.button_rect(&PanelKey::WELCOME).unwrap();
        let settings = layout.button_rect(&PanelKey::SETTINGS).unwrap();

        assert_eq!(layout.cluster.x, 20.0);
        assert_eq!(welcome.y, layout.drag_handle.bottom() + BUTTON_GAP);
        assert_eq!(settings.y, welcome.bottom() + BUTTON_GAP);
        assert!(layout.cluster.contains_point(Point::new(settings.x, settings.bottom() - 1.0)));
    }

    #[test]
    fn test_pressed_flag_tracks_active() {
        let registry = PanelRegistry::with_defaults();
        let state = OverlayState::new(Some(PanelKey::SETTINGS));
        let layout = OverlayLayout::compute(window(), &state, &registry, true);

        assert!(layout.button(&PanelKey::SETTINGS).unwrap().pressed);
        assert!(!layout.button(&PanelKey::WELCOME).unwrap().pressed);
    }

    #[test]
    fn test_panel_rect_only_for_open_panel() {
        let registry = PanelRegistry::with_defaults();
        let mut state = OverlayState::new(Some(PanelKey::WELCOME));
        state
            .positions
            .insert(PanelKey::WELCOME, PanelPosition::new(300.0, 40.0));
        let layout = OverlayLayout::compute(window(), &state, &registry, true);

        let rect = layout.panel_rect(&PanelKey::WELCOME).unwrap();
        assert_eq!((rect.x, rect.y), (300.0, 40.0));
        assert_eq!(layout.panel_rect(&PanelKey::SETTINGS), None);
    }

    #[test]
    fn test_empty_container_is_missing() {
        let registry = PanelRegistry::with_defaults();
        let layout = OverlayLayout::compute(
            Rect::new(0.0, 0.0, 0.0, 0.0),
            &OverlayState::default(),
            &registry,
            true,
        );

        assert_eq!(layout.container_rect(), None);
    }
}
