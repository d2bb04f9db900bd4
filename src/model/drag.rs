//! Drag handling for the button cluster
//!
//! A press on the drag handle arms the container; the first movement after
//! that starts the gesture. Only that edge reports `started`, so the forced
//! close of the active panel happens once per gesture.

use crate::geometry::{clamp_within, Point, Rect, Size};

/// Where the cluster sits before the user moves it
pub const DEFAULT_CLUSTER_POSITION: Point = Point { x: 20.0, y: 20.0 };

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragPhase {
    Idle,
    /// Pressed on the handle, not moved yet
    Armed { origin: Point, start: Point },
    Dragging { origin: Point, start: Point },
}

/// Result of a pointer movement during a gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragUpdate {
    /// True only for the movement that started the gesture
    pub started: bool,
    /// Pointer offset from where the gesture began
    pub delta: (f32, f32),
    /// New container-relative cluster position
    pub position: Point,
}

/// Tracks the cluster position and the idle/dragging state
#[derive(Debug, Clone)]
pub struct DragContainer {
    phase: DragPhase,
    position: Point,
}

impl Default for DragContainer {
    fn default() -> Self {
        Self::new(DEFAULT_CLUSTER_POSITION)
    }
}

impl DragContainer {
    pub fn new(position: Point) -> Self {
        Self {
            phase: DragPhase::Idle,
            position,
        }
    }

    /// Container-relative position of the cluster's top-left corner
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Pointer went down on the drag handle
    pub fn press(&mut self, pointer: Point) {
        self.phase = DragPhase::Armed {
            origin: pointer,
            start: self.position,
        };
    }

    /// Pointer moved. `bounds` is the container rect and `size` the cluster size.
    ///
    /// Returns `None` when no gesture is armed or in progress.
    pub fn move_to(&mut self, pointer: Point, bounds: Rect, size: Size) -> Option<DragUpdate> {
        let (origin, start, started) = match self.phase {
            DragPhase::Idle => return None,
            DragPhase::Armed { origin, start } => (origin, start, true),
            DragPhase::Dragging { origin, start } => (origin, start, false),
        };

        if started {
            tracing::debug!(x = pointer.x, y = pointer.y, "Cluster drag started");
            self.phase = DragPhase::Dragging { origin, start };
        }

        let delta = pointer.delta_from(origin);
        self.position = clamp_within(Point::new(start.x + delta.0, start.y + delta.1), size, bounds);

        Some(DragUpdate {
            started,
            delta,
            position: self.position,
        })
    }

    /// Pointer released. Returns true if a drag gesture ended.
    pub fn release(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        if was_dragging {
            tracing::debug!(
                x = self.position.x,
                y = self.position.y,
                "Cluster drag stopped"
            );
        }
        self.phase = DragPhase::Idle;
        was_dragging
    }
}
