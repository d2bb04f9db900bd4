//! Message types for the Elm-style architecture
//!
//! All overlay state changes flow through these message types.

use crate::geometry::PanelPosition;
use crate::panel::PanelKey;

/// Panel visibility messages
#[derive(Debug, Clone, PartialEq)]
pub enum PanelMsg {
    /// A trigger button was clicked. `placement` is the freshly computed
    /// position, or `None` when the trigger or container could not be found.
    ButtonClicked {
        key: PanelKey,
        placement: Option<PanelPosition>,
    },
    /// A click landed outside the overlay
    OutsideClick,
    /// The command-triggered dismissal timer elapsed
    DismissalElapsed,
}

/// Button cluster drag messages
#[derive(Debug, Clone, PartialEq)]
pub enum DragMsg {
    /// First movement of a drag gesture
    Started,
    /// Pointer released after a drag
    Stopped,
}

/// Messages from external collaborators
#[derive(Debug, Clone, PartialEq)]
pub enum ExternalMsg {
    /// A decoded chat command (e.g. "welcome")
    ChatCommand(String),
    /// The sleep bus reported a wake
    Wake,
    /// The persisted opened-menu setting changed outside the overlay
    OpenedMenuChanged(Option<PanelKey>),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Panel(PanelMsg),
    Drag(DragMsg),
    External(ExternalMsg),
}
