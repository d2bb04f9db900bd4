//! Outside-click dismissal and double-click suppression
//!
//! Two capture-phase document listeners, installed on mount and removed on
//! unmount:
//! - click outside the overlay closes the active panel
//! - double click inside the overlay stops propagation, so the host page
//!   does not toggle fullscreen

use crate::document::{EventSource, ListenerId, PointerEvent, PointerKind};

/// Classifies whether an event lies within the overlay's visible region
pub trait HitTest {
    fn is_under_overlay(&self, event: &PointerEvent) -> bool;
}

impl<F> HitTest for F
where
    F: Fn(&PointerEvent) -> bool,
{
    fn is_under_overlay(&self, event: &PointerEvent) -> bool {
        self(event)
    }
}

/// What the guard decided for one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardAction {
    /// Nothing to do
    Pass,
    /// Click outside the overlay: close the active panel
    CloseActive,
    /// Double click inside the overlay: propagation stopped
    Suppressed,
}

/// Owner of the two document listeners
#[derive(Debug, Default)]
pub struct ClickGuard {
    click: Option<ListenerId>,
    double_click: Option<ListenerId>,
}

impl ClickGuard {
    /// Register both capture listeners
    pub fn install(events: &mut dyn EventSource) -> Self {
        let guard = Self {
            click: Some(events.add_capture_listener(PointerKind::Click)),
            double_click: Some(events.add_capture_listener(PointerKind::DoubleClick)),
        };
        tracing::debug!("Click guard installed");
        guard
    }

    /// Remove both listeners. Safe to call more than once.
    pub fn uninstall(&mut self, events: &mut dyn EventSource) {
        for id in [self.click.take(), self.double_click.take()]
            .into_iter()
            .flatten()
        {
            events.remove_listener(id);
        }
    }

    pub fn is_installed(&self) -> bool {
        self.click.is_some() || self.double_click.is_some()
    }

    /// Run the guard for an event delivered by the document
    pub fn handle(&self, event: &mut PointerEvent, hit: &dyn HitTest) -> GuardAction {
        match event.kind {
            PointerKind::Click if self.click.is_some() => {
                if hit.is_under_overlay(event) {
                    GuardAction::Pass
                } else {
                    GuardAction::CloseActive
                }
            }
            PointerKind::DoubleClick if self.double_click.is_some() => {
                if hit.is_under_overlay(event) {
                    event.stop_propagation();
                    GuardAction::Suppressed
                } else {
                    GuardAction::Pass
                }
            }
            _ => GuardAction::Pass,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    fn inside_left_half(event: &PointerEvent) -> bool {
        event.position.x < 100.0
    }

    #[test]
    fn test_install_registers_two_listeners() {
        let mut document = Document::new();
        let mut guard = ClickGuard::install(&mut document);

        assert!(document.listens_for(PointerKind::Click));
        assert!(document.listens_for(PointerKind::DoubleClick));

        guard.uninstall(&mut document);
        guard.uninstall(&mut document);
        assert_eq!(document.listener_count(), 0);
        assert!(!guard.is_installed());
    }

    #[test]
    fn test_outside_click_closes() {
        let mut document = Document::new();
        let guard = ClickGuard::install(&mut document);

        let mut outside = PointerEvent::click(500.0, 10.0);
        let mut inside = PointerEvent::click(10.0, 10.0);

        assert_eq!(
            guard.handle(&mut outside, &inside_left_half),
            GuardAction::CloseActive
        );
        assert_eq!(guard.handle(&mut inside, &inside_left_half), GuardAction::Pass);
        assert!(!outside.propagation_stopped());
    }

    #[test]
    fn test_double_click_inside_is_suppressed() {
        let mut document = Document::new();
        let guard = ClickGuard::install(&mut document);

        let mut inside = PointerEvent::double_click(10.0, 10.0);
        let mut outside = PointerEvent::double_click(500.0, 10.0);

        assert_eq!(
            guard.handle(&mut inside, &inside_left_half),
            GuardAction::Suppressed
        );
        assert!(inside.propagation_stopped());
        assert_eq!(guard.handle(&mut outside, &inside_left_half), GuardAction::Pass);
        assert!(!outside.propagation_stopped());
    }

    #[test]
    fn test_uninstalled_guard_passes_everything() {
        let mut document = Document::new();
        let mut guard = ClickGuard::install(&mut document);
        guard.uninstall(&mut document);

        let mut event = PointerEvent::click(500.0, 10.0);
        assert_eq!(guard.handle(&mut event, &inside_left_half), GuardAction::Pass);
    }
}
