//! Overlay controller
//!
//! Owns the overlay state for one mount and is the only entry point the
//! host uses. Every operation turns into a [`Msg`], runs through
//! [`update`], and the returned [`Cmd`] is executed against the settings
//! store and the sleep bus before the call returns.
//!
//! Wake signals from the sleep bus are queued on an internal channel and
//! drained after each operation, so a wake caused by the controller's own
//! command is observed after the state that requested it.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;

use crate::click_guard::{ClickGuard, GuardAction, HitTest};
use crate::commands::Cmd;
use crate::config::SettingsStore;
use crate::document::{EventSource, PointerEvent};
use crate::geometry::{place, PanelPosition, Point};
use crate::messages::{DragMsg, ExternalMsg, Msg, PanelMsg};
use crate::model::{OverlayState, Visibility};
use crate::panel::{PanelKey, PanelRegistry};
use crate::sleep::{SleepBus, SubscriptionId};
use crate::update::{update, UpdateContext};
use crate::view::Surface;

/// Headless overlay: panel visibility, placement, drag and dismissal
pub struct OverlayController<S: SettingsStore, B: SleepBus> {
    state: OverlayState,
    registry: PanelRegistry,
    settings: S,
    sleep: B,
    guard: ClickGuard,
    wake_subscription: Option<SubscriptionId>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl<S: SettingsStore, B: SleepBus> OverlayController<S, B> {
    /// Mount the overlay: restore the persisted panel, subscribe to wake
    /// signals and install the document click guard.
    pub fn mount(
        mut registry: PanelRegistry,
        settings: S,
        mut sleep: B,
        events: &mut dyn EventSource,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();

        let persisted = settings.opened_menu();
        let active = registry.validate(persisted.clone());
        if persisted.is_some() && active.is_none() {
            tracing::debug!(key = ?persisted, "Persisted panel is not registered");
        }
        registry.sync_settings(&settings);

        let tx = msg_tx.clone();
        let wake_subscription = sleep.subscribe(Box::new(move || {
            let _ = tx.send(Msg::External(ExternalMsg::Wake));
        }));

        let guard = ClickGuard::install(events);

        tracing::info!(active = ?active, panels = registry.len(), "Overlay mounted");

        Self {
            state: OverlayState::new(active),
            registry,
            settings,
            sleep,
            guard,
            wake_subscription: Some(wake_subscription),
            msg_tx,
            msg_rx,
        }
    }

    /// Tear down: cancel the dismissal timer, remove document listeners and
    /// the wake subscription. Safe to call more than once.
    pub fn unmount(&mut self, events: &mut dyn EventSource) {
        self.state.dismissal.cancel();
        self.guard.uninstall(events);
        if let Some(id) = self.wake_subscription.take() {
            self.sleep.unsubscribe(id);
            tracing::info!("Overlay unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.wake_subscription.is_some()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// A trigger button was clicked. Returns true if a redraw is needed.
    pub fn click(&mut self, key: &PanelKey, surface: &dyn Surface, now: Instant) -> bool {
        // Placement is only needed for an open; drag and toggle-close skip it
        let placement = if self.state.is_dragging() || self.state.is_open(key) {
            None
        } else {
            self.placement_for(key, surface)
        };

        self.dispatch(
            Msg::Panel(PanelMsg::ButtonClicked {
                key: key.clone(),
                placement,
            }),
            now,
        )
    }

    /// Run the document capture listeners for `event`
    pub fn capture(&mut self, event: &mut PointerEvent, hit: &dyn HitTest, now: Instant) -> bool {
        match self.guard.handle(event, hit) {
            GuardAction::CloseActive => self.dispatch(Msg::Panel(PanelMsg::OutsideClick), now),
            GuardAction::Suppressed => {
                tracing::trace!("Double click inside overlay suppressed");
                false
            }
            GuardAction::Pass => false,
        }
    }

    /// A decoded chat command arrived
    pub fn chat_command(&mut self, command: &str, now: Instant) -> bool {
        self.dispatch(Msg::External(ExternalMsg::ChatCommand(command.to_string())), now)
    }

    /// Pointer went down on the cluster's drag handle
    pub fn drag_press(&mut self, pointer: Point) {
        self.state.drag.press(pointer);
    }

    /// Pointer moved while the drag handle may be held
    pub fn drag_move(&mut self, pointer: Point, surface: &dyn Surface, now: Instant) -> bool {
        let (Some(bounds), Some(cluster)) = (surface.container_rect(), surface.cluster_rect())
        else {
            return false;
        };

        let Some(moved) = self.state.drag.move_to(pointer, bounds, cluster.size()) else {
            return false;
        };

        if moved.started {
            self.dispatch(Msg::Drag(DragMsg::Started), now);
        }
        true
    }

    /// Pointer released
    pub fn drag_release(&mut self, now: Instant) -> bool {
        if self.state.drag.release() {
            self.dispatch(Msg::Drag(DragMsg::Stopped), now)
        } else {
            false
        }
    }

    /// Pointer click inside the open panel's card
    pub fn panel_click(&mut self, point: Point, surface: &dyn Surface) -> bool {
        let Some(key) = self.state.active.clone() else {
            return false;
        };
        let Some(bounds) = surface.panel_rect(&key) else {
            return false;
        };
        self.registry
            .get_mut(&key)
            .is_some_and(|entry| entry.content.click(bounds, point))
    }

    /// Wheel movement over the open panel's card
    pub fn panel_scroll(&mut self, point: Point, delta_y: f32, surface: &dyn Surface) -> bool {
        let Some(key) = self.state.active.clone() else {
            return false;
        };
        let Some(bounds) = surface.panel_rect(&key) else {
            return false;
        };
        self.registry
            .get_mut(&key)
            .is_some_and(|entry| entry.content.scroll(bounds, point, delta_y))
    }

    /// Advance timers and drain queued wake signals
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut redraw = false;
        if let Some(msg) = self.state.dismissal.poll(now) {
            redraw |= self.dispatch(msg, now);
        }
        redraw | self.drain(now)
    }

    /// Record the open panel's size after its first visible layout
    pub fn measure_active(&mut self, surface: &dyn Surface) {
        if let Some(key) = &self.state.active {
            self.state.dimensions.measure(key, || surface.panel_rect(key));
        }
    }

    /// The settings store changed outside the overlay: re-apply its values
    pub fn settings_changed(&mut self, now: Instant) -> bool {
        self.registry.sync_settings(&self.settings);
        let key = self.settings.opened_menu();
        self.dispatch(Msg::External(ExternalMsg::OpenedMenuChanged(key)), now);
        // Panel contents may show settings values
        true
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// False while the player is sleeping, unless the development override
    /// keeps the overlay on screen
    pub fn is_visible(&self) -> bool {
        let hiding_disabled = cfg!(debug_assertions) && self.settings.disable_overlay_hiding();
        !self.sleep.is_sleeping() || hiding_disabled
    }

    pub fn visibility(&self) -> Visibility {
        self.state.visibility()
    }

    pub fn active(&self) -> Option<&PanelKey> {
        self.state.active.as_ref()
    }

    /// Last stored position of `key`, or the default corner
    pub fn position(&self, key: &PanelKey) -> PanelPosition {
        self.state.position(key)
    }

    pub fn cluster_position(&self) -> Point {
        self.state.cluster_position()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// When the dismissal timer fires, if armed
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.dismissal.deadline()
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn registry(&self) -> &PanelRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut S {
        &mut self.settings
    }

    pub fn sleep_bus(&self) -> &B {
        &self.sleep
    }

    pub fn sleep_bus_mut(&mut self) -> &mut B {
        &mut self.sleep
    }

    /// Sender for messages produced off the event loop (chat readers,
    /// watchers). Queued messages are applied on the next operation or tick.
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_tx.clone()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn placement_for(&self, key: &PanelKey, surface: &dyn Surface) -> Option<PanelPosition> {
        let button = surface.button_rect(key)?;
        let container = surface.container_rect()?;
        let position = place(button, container, self.state.dimensions.get(key));
        tracing::debug!(key = %key, x = position.x, y = position.y, "Placed panel");
        Some(position)
    }

    /// Apply `msg`, then everything it queued
    fn dispatch(&mut self, msg: Msg, now: Instant) -> bool {
        self.apply(msg, now) | self.drain(now)
    }

    fn drain(&mut self, now: Instant) -> bool {
        let mut redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            redraw |= self.apply(msg, now);
        }
        redraw
    }

    fn apply(&mut self, msg: Msg, now: Instant) -> bool {
        let ctx = UpdateContext {
            registry: &self.registry,
            now,
            chat_popup_disabled: self.settings.disable_chat_popup(),
        };

        match update(&mut self.state, &ctx, msg) {
            Some(cmd) => {
                let redraw = cmd.needs_redraw();
                self.process_cmd(cmd, now);
                redraw
            }
            None => false,
        }
    }

    fn process_cmd(&mut self, cmd: Cmd, now: Instant) {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::PersistOpenedMenu(key) => self.settings.set_opened_menu(key),
            Cmd::Wake(duration) => self.sleep.wake(now, duration),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd, now);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OverlaySettings;
    use crate::document::Document;
    use crate::sleep::{SleepTracker, DEFAULT_IDLE_TIMEOUT};

    type TestController = OverlayController<OverlaySettings, SleepTracker>;

    fn mount(settings: OverlaySettings) -> (TestController, Document, Instant) {
        let now = Instant::now();
        let mut document = Document::new();
        let controller = OverlayController::mount(
            PanelRegistry::with_defaults(),
            settings,
            SleepTracker::new(now, DEFAULT_IDLE_TIMEOUT),
            &mut document,
        );
        (controller, document, now)
    }

    #[test]
    fn test_mount_restores_persisted_panel() {
        let (controller, document, _) = mount(OverlaySettings {
            opened_menu: "settings".into(),
            ..Default::default()
        });

        assert_eq!(controller.active(), Some(&PanelKey::SETTINGS));
        assert_eq!(document.listener_count(), 2);
        assert_eq!(controller.sleep_bus().listener_count(), 1);
    }

    #[test]
    fn test_mount_drops_unknown_persisted_panel() {
        let (controller, _, _) = mount(OverlaySettings {
            opened_menu: "chat".into(),
            ..Default::default()
        });

        assert_eq!(controller.visibility(), Visibility::Closed);
    }

    #[test]
    fn test_unmount_releases_everything() {
        let (mut controller, mut document, now) = mount(OverlaySettings::default());
        controller.chat_command("welcome", now);
        assert!(controller.next_deadline().is_some());

        controller.unmount(&mut document);
        controller.unmount(&mut document);

        assert!(!controller.is_mounted());
        assert_eq!(controller.next_deadline(), None);
        assert_eq!(document.listener_count(), 0);
        assert_eq!(controller.sleep_bus().listener_count(), 0);
        assert_eq!(controller.settings().opened_menu, "welcome");
    }

    #[test]
    fn test_queued_messages_are_drained_on_tick() {
        let (mut controller, _, now) = mount(OverlaySettings::default());
        controller
            .sender()
            .send(Msg::External(ExternalMsg::OpenedMenuChanged(Some(
                PanelKey::WELCOME,
            ))))
            .unwrap();

        assert!(controller.tick(now));
        assert_eq!(controller.active(), Some(&PanelKey::WELCOME));
        // External changes are applied, not written back
        assert_eq!(controller.settings().opened_menu, "");
    }
}
