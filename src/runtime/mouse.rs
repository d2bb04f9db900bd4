//! Click tracking for double-click detection
//!
//! winit reports raw button presses; the document-level `dblclick` event the
//! overlay guards against is synthesized here from press timing and
//! position.

use std::time::{Duration, Instant};

use player_overlay::document::PointerEvent;
use player_overlay::geometry::Point;

/// Two clicks closer than this count as a double click
const DOUBLE_CLICK_TIME: Duration = Duration::from_millis(300);

/// Maximum pointer travel between the two clicks, in pixels
const DOUBLE_CLICK_SLOP: f32 = 4.0;

/// Click tracking state for double click detection
#[derive(Debug, Default)]
pub struct ClickTracker {
    last_click_time: Option<Instant>,
    last_click_position: Option<Point>,
    click_count: u32,
}

impl ClickTracker {
    /// Update click count based on timing and position
    ///
    /// Returns the new click count (1 or 2). A third rapid click starts over.
    pub fn track_click(&mut self, now: Instant, position: Point) -> u8 {
        let is_rapid_click = self
            .last_click_time
            .is_some_and(|last| now.duration_since(last) < DOUBLE_CLICK_TIME);
        let is_same_position = self.last_click_position.is_some_and(|last| {
            let (dx, dy) = position.delta_from(last);
            dx.abs() <= DOUBLE_CLICK_SLOP && dy.abs() <= DOUBLE_CLICK_SLOP
        });

        if is_rapid_click && is_same_position && self.click_count == 1 {
            self.click_count = 2;
        } else {
            self.click_count = 1;
        }

        self.last_click_time = Some(now);
        self.last_click_position = Some(position);

        self.click_count as u8
    }

    /// Document events for one completed click: always a `click`, followed
    /// by a `dblclick` when it completes a pair
    pub fn events_for(&mut self, now: Instant, position: Point) -> Vec<PointerEvent> {
        let mut events = vec![PointerEvent::click(position.x, position.y)];
        if self.track_click(now, position) == 2 {
            events.push(PointerEvent::double_click(position.x, position.y));
        }
        events
    }

    /// Reset click tracking (e.g. after a drag)
    pub fn reset(&mut self) {
        self.click_count = 0;
        self.last_click_position = None;
    }
}
