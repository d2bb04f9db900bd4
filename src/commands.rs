//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The controller executes them synchronously, in order.

use std::time::Duration;

use crate::panel::PanelKey;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the overlay
    Redraw,
    /// Write the active panel to the settings store
    PersistOpenedMenu(Option<PanelKey>),
    /// Ask the sleep bus to stay awake for at least this long
    Wake(Duration),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::PersistOpenedMenu(_) => false,
            Cmd::Wake(_) => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Flatten nested batches into execution order
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            cmd => vec![cmd],
        }
    }
}
