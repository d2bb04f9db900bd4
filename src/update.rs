//! Update functions for the Elm-style architecture
//!
//! The overlay's visibility state machine. States are `Closed` and
//! `Open(key)`; every transition is one match arm below, and its side
//! effects are returned as a [`Cmd`] for the controller to execute.

use std::time::{Duration, Instant};

use crate::commands::Cmd;
use crate::messages::{DragMsg, ExternalMsg, Msg, PanelMsg};
use crate::model::OverlayState;
use crate::panel::{PanelKey, PanelRegistry};

/// The only chat command the overlay reacts to
pub const WELCOME_COMMAND: &str = "welcome";

/// How long a command-triggered panel stays open
pub const COMMAND_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Read-only inputs for a single update
#[derive(Debug, Clone, Copy)]
pub struct UpdateContext<'a> {
    pub registry: &'a PanelRegistry,
    pub now: Instant,
    /// `disableChatPopup` from the settings store
    pub chat_popup_disabled: bool,
}

/// Main update function - dispatches to sub-handlers
pub fn update(state: &mut OverlayState, ctx: &UpdateContext<'_>, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Panel(m) => update_panel(state, ctx, m),
        Msg::Drag(m) => update_drag(state, m),
        Msg::External(m) => update_external(state, ctx, m),
    }
}

/// Handle button clicks, outside clicks and timer expiry
pub fn update_panel(
    state: &mut OverlayState,
    ctx: &UpdateContext<'_>,
    msg: PanelMsg,
) -> Option<Cmd> {
    match msg {
        PanelMsg::ButtonClicked { key, placement } => {
            if state.is_dragging() {
                tracing::debug!(key = %key, "Ignoring click during cluster drag");
                return None;
            }
            if !ctx.registry.contains(&key) {
                tracing::debug!(key = %key, "Ignoring click for unregistered panel");
                return None;
            }

            if state.is_open(&key) {
                return set_active(state, None);
            }

            // Trigger or container missing at click time: the click is dropped
            let Some(position) = placement else {
                tracing::debug!(key = %key, "No placement for panel, ignoring click");
                return None;
            };

            state.positions.insert(key.clone(), position);
            set_active(state, Some(key))
        }

        PanelMsg::OutsideClick => set_active(state, None),

        PanelMsg::DismissalElapsed => {
            tracing::debug!("Dismissal timer elapsed");
            set_active(state, None)
        }
    }
}

/// Handle drag gesture edges
pub fn update_drag(state: &mut OverlayState, msg: DragMsg) -> Option<Cmd> {
    match msg {
        // Forced close, once per gesture
        DragMsg::Started => set_active(state, None),
        DragMsg::Stopped => Some(Cmd::Redraw),
    }
}

/// Handle chat commands, wake signals and external settings changes
pub fn update_external(
    state: &mut OverlayState,
    ctx: &UpdateContext<'_>,
    msg: ExternalMsg,
) -> Option<Cmd> {
    match msg {
        ExternalMsg::ChatCommand(command) => {
            if ctx.chat_popup_disabled || command != WELCOME_COMMAND {
                return None;
            }
            if !ctx.registry.contains(&PanelKey::WELCOME) {
                tracing::debug!("Welcome command without a welcome panel");
                return None;
            }

            // Opens at the last known (or default) position; never re-placed
            let opened = set_active(state, Some(PanelKey::WELCOME));

            state
                .dismissal
                .schedule(ctx.now, COMMAND_TIMEOUT, Msg::Panel(PanelMsg::DismissalElapsed));
            state.awaking = true;

            let mut cmds = opened.map(Cmd::flatten).unwrap_or_default();
            cmds.push(Cmd::Wake(COMMAND_TIMEOUT));
            cmds.push(Cmd::Redraw);
            Some(Cmd::batch(cmds))
        }

        ExternalMsg::Wake => {
            if state.awaking {
                // This wake was requested by the command itself
                state.awaking = false;
            } else if state.dismissal.cancel() {
                tracing::debug!("User interaction cancelled auto-dismiss");
            }
            None
        }

        ExternalMsg::OpenedMenuChanged(key) => {
            let key = ctx.registry.validate(key);
            if state.active == key {
                return None;
            }
            tracing::debug!(
                from = ?state.active,
                to = ?key,
                "Applying externally changed opened menu"
            );
            state.active = key;
            Some(Cmd::Redraw)
        }
    }
}

/// Change the active panel, persisting the new value if it differs
fn set_active(state: &mut OverlayState, key: Option<PanelKey>) -> Option<Cmd> {
    if state.active == key {
        return None;
    }

    tracing::debug!(from = ?state.active, to = ?key, "Active panel changed");
    state.active = key.clone();
    Some(Cmd::batch(vec![Cmd::PersistOpenedMenu(key), Cmd::Redraw]))
}
