//! Document-level pointer event routing
//!
//! Models the root document the overlay is mounted in. Listeners registered
//! through [`EventSource`] run in the capture phase, before the event
//! reaches its target. A capture listener can stop propagation, in which
//! case the caller skips target handling.

use crate::geometry::Point;

/// Pointer events the overlay cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Click,
    DoubleClick,
}

/// A pointer event travelling through the document
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// Position in window coordinates
    pub position: Point,
    propagation_stopped: bool,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, position: Point) -> Self {
        Self {
            kind,
            position,
            propagation_stopped: false,
        }
    }

    pub fn click(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Click, Point::new(x, y))
    }

    pub fn double_click(x: f32, y: f32) -> Self {
        Self::new(PointerKind::DoubleClick, Point::new(x, y))
    }

    /// Keep the event from reaching its target
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Identifies one registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Registration interface for capture-phase document listeners
pub trait EventSource {
    fn add_capture_listener(&mut self, kind: PointerKind) -> ListenerId;

    fn remove_listener(&mut self, id: ListenerId);
}

/// In-process document: records listeners and dispatches capture-first
#[derive(Debug, Default)]
pub struct Document {
    listeners: Vec<(ListenerId, PointerKind)>,
    next_id: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listens_for(&self, kind: PointerKind) -> bool {
        self.listeners.iter().any(|(_, k)| *k == kind)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Run the capture phase for `event`: every listener registered for its
    /// kind sees it, in registration order.
    ///
    /// Returns true if the event should go on to its target, i.e. no
    /// listener stopped propagation.
    pub fn dispatch<C>(&self, event: &mut PointerEvent, mut capture: C) -> bool
    where
        C: FnMut(ListenerId, &mut PointerEvent),
    {
        for (id, kind) in &self.listeners {
            if *kind == event.kind {
                capture(*id, event);
            }
        }

        if event.propagation_stopped() {
            tracing::trace!(kind = ?event.kind, "Propagation stopped in capture phase");
            return false;
        }
        true
    }
}

impl EventSource for Document {
    fn add_capture_listener(&mut self, kind: PointerKind) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.push((id, kind));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener, _)| *listener != id);
    }
}
