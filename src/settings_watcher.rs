//! Settings file watching
//!
//! Uses the `notify` crate with debouncing to detect edits to the settings
//! file made outside the overlay, so the persisted opened menu can be
//! re-applied.

use notify_debouncer_mini::{new_debouncer, DebouncedEvent, DebouncedEventKind, Debouncer};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

type DebounceResult = Result<Vec<DebouncedEvent>, notify::Error>;

/// Watches one settings file for changes
pub struct SettingsWatcher {
    /// The debouncer handles watching and event coalescing
    _debouncer: Debouncer<notify::RecommendedWatcher>,
    rx: Receiver<DebounceResult>,
    path: PathBuf,
}

impl SettingsWatcher {
    /// Watch `path`. The parent directory is watched (non-recursively) so
    /// editors that replace the file on save are still noticed.
    pub fn new(path: PathBuf) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();

        let mut debouncer = new_debouncer(Duration::from_millis(250), tx)?;

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        debouncer
            .watcher()
            .watch(dir, notify::RecursiveMode::NonRecursive)?;

        tracing::info!("Watching settings file: {}", path.display());

        Ok(Self {
            _debouncer: debouncer,
            rx,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drain pending events (non-blocking). Returns true if the settings
    /// file changed since the last poll.
    pub fn poll_changed(&self) -> bool {
        let mut changed = false;

        while let Ok(result) = self.rx.try_recv() {
            match result {
                Ok(events) => {
                    changed |= events.iter().any(|event| {
                        // Only the parent directory is watched
                        event.path.file_name() == self.path.file_name()
                            && matches!(event.kind, DebouncedEventKind::Any)
                    });
                }
                Err(e) => {
                    tracing::warn!("Settings watcher error: {:?}", e);
                }
            }
        }

        if changed {
            tracing::debug!("Settings file changed on disk");
        }
        changed
    }
}
