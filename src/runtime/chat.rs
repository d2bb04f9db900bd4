//! Stdin chat source
//!
//! Reads chat lines from stdin on a background thread and forwards decoded
//! commands to the controller's message channel.

use std::io::{self, BufRead};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use player_overlay::chat;
use player_overlay::messages::{ExternalMsg, Msg};

/// Spawn the reader. The thread ends at EOF or when the receiver is gone.
pub fn spawn_stdin_reader(tx: Sender<Msg>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("chat-stdin".into())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        tracing::warn!("Failed to read chat line: {}", e);
                        break;
                    }
                };

                let Some(command) = chat::decode(&line) else {
                    continue;
                };
                tracing::debug!(%command, "Chat command received");
                if tx.send(Msg::External(ExternalMsg::ChatCommand(command))).is_err() {
                    break;
                }
            }
            tracing::debug!("Chat reader finished");
        })
}
