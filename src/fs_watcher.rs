//! File system watching for `watch` mode
//!
//! Uses the `notify` crate with debouncing so a burst of saves in the public
//! directory triggers a single rebuild.

use notify_debouncer_mini::{new_debouncer, DebouncedEvent, DebouncedEventKind, Debouncer};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

/// Debounce delay applied to change notifications
pub const DEBOUNCE_MS: u64 = 500;

type EventBatch = Result<Vec<DebouncedEvent>, notify::Error>;

/// Debounced recursive watcher over the public directory
pub struct FileSystemWatcher {
    /// The debouncer handles watching and event coalescing
    _debouncer: Debouncer<notify::RecommendedWatcher>,
    rx: Receiver<EventBatch>,
    root: PathBuf,
    /// Changes below this path are ignored (the output directory, when it
    /// lives inside the watched tree)
    exclude: Option<PathBuf>,
}

impl FileSystemWatcher {
    pub fn new(root: PathBuf, exclude: Option<PathBuf>) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();

        let mut debouncer = new_debouncer(Duration::from_millis(DEBOUNCE_MS), tx)?;
        debouncer
            .watcher()
            .watch(&root, notify::RecursiveMode::Recursive)?;

        tracing::info!("Watching {} for changes", root.display());

        Ok(Self {
            _debouncer: debouncer,
            rx,
            root,
            exclude,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Poll for pending changes (non-blocking)
    pub fn poll_changes(&self) -> Vec<PathBuf> {
        let mut changed = Vec::new();
        while let Ok(batch) = self.rx.try_recv() {
            self.collect(batch, &mut changed);
        }
        changed
    }

    /// Block until at least one relevant change arrives or `timeout` passes.
    ///
    /// Returns `None` once the watcher has shut down.
    pub fn wait_for_changes(&self, timeout: Duration) -> Option<Vec<PathBuf>> {
        let mut changed = Vec::new();
        match self.rx.recv_timeout(timeout) {
            Ok(batch) => self.collect(batch, &mut changed),
            Err(RecvTimeoutError::Timeout) => return Some(changed),
            Err(RecvTimeoutError::Disconnected) => return None,
        }
        changed.extend(self.poll_changes());
        changed.dedup();
        Some(changed)
    }

    fn collect(&self, batch: EventBatch, changed: &mut Vec<PathBuf>) {
        match batch {
            Ok(events) => {
                for event in events {
                    if matches!(event.kind, DebouncedEventKind::AnyContinuous)
                        || self.should_ignore(&event.path)
                    {
                        continue;
                    }
                    if !changed.contains(&event.path) {
                        changed.push(event.path);
                    }
                }
            }
            Err(e) => {
                tracing::warn!("File system watcher error: {:?}", e);
            }
        }
        if !changed.is_empty() {
            tracing::debug!("File system watcher detected {} changes", changed.len());
        }
    }

    /// Hidden files, editor swap files and the excluded directory
    fn should_ignore(&self, path: &Path) -> bool {
        if let Some(exclude) = &self.exclude {
            if path.starts_with(exclude) {
                return true;
            }
        }

        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative.components().any(|component| match component {
            std::path::Component::Normal(name) => {
                let name = name.to_string_lossy();
                name.starts_with('.') || name.ends_with('~') || name.ends_with(".swp")
            }
            _ => false,
        })
    }
}
