// src/watch/file_change.rs

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::{Duration, Instant};

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, warn};

use crate::errors::{IniError, Result};
use crate::fs::RealFileSystem;
use crate::watch::hash::compute_file_hash;
use crate::watch::trigger::BlockingTrigger;

/// A live `notify` watch on one file.
///
/// The file's parent directory is watched (non-recursively) so that editors
/// which replace the file instead of writing in place are still noticed.
/// Events are queued from the moment [`FileWatch::new`] returns, so a change
/// made between two [`FileWatch::wait`] calls is never lost.
///
/// With hash gating, `wait` only returns once the file's blake3 hash differs
/// from the last one seen (taken after registration, then after each fire).
pub struct FileWatch {
    target: PathBuf,
    hash_gated: bool,
    baseline: Option<String>,
    events: mpsc::Receiver<notify::Result<Event>>,
    _watcher: RecommendedWatcher,
}

impl fmt::Debug for FileWatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileWatch")
            .field("target", &self.target)
            .field("hash_gated", &self.hash_gated)
            .finish_non_exhaustive()
    }
}

impl FileWatch {
    pub fn new(path: &Path, hash_gated: bool) -> Result<Self> {
        let target = resolve_target(path)?;
        let dir = target.parent().unwrap_or(Path::new(".")).to_path_buf();

        let (event_tx, events) = mpsc::channel::<notify::Result<Event>>();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| {
                // The receiver is gone once the watch has been dropped.
                let _ = event_tx.send(res);
            },
            Config::default(),
        )?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        // Registered first: an edit racing this hash still queues an event.
        let baseline = if hash_gated {
            compute_file_hash(&RealFileSystem, &target).ok()
        } else {
            None
        };
        debug!(?target, hash_gated, "watching for file change");

        Ok(Self {
            target,
            hash_gated,
            baseline,
            events,
            _watcher: watcher,
        })
    }

    /// Canonical path of the watched file.
    pub fn path(&self) -> &Path {
        &self.target
    }

    /// Block until the file is created, modified or removed (and, if hash
    /// gated, its content actually differs). `None` waits forever.
    pub fn wait(&mut self, timeout: Option<Duration>) -> Result<()> {
        let deadline = timeout.map(|t| Instant::now() + t);

        loop {
            let res = match deadline {
                Some(deadline) => {
                    let remaining = deadline.saturating_duration_since(Instant::now());
                    match self.events.recv_timeout(remaining) {
                        Ok(res) => res,
                        Err(RecvTimeoutError::Timeout) => {
                            return Err(IniError::Trigger(format!(
                                "no change to {:?} within {:?}",
                                self.target,
                                timeout.unwrap_or_default()
                            )));
                        }
                        Err(RecvTimeoutError::Disconnected) => {
                            return Err(watcher_gone(&self.target));
                        }
                    }
                }
                None => self
                    .events
                    .recv()
                    .map_err(|_| watcher_gone(&self.target))?,
            };

            let event = match res {
                Ok(event) => event,
                Err(err) => {
                    warn!(error = %err, "file watch error");
                    continue;
                }
            };

            if !is_content_event(&event.kind) || !event.paths.iter().any(|p| p == &self.target) {
                continue;
            }
            debug!(?event, "change event for watched file");

            if self.hash_gated {
                match compute_file_hash(&RealFileSystem, &self.target) {
                    Ok(current) if Some(&current) == self.baseline.as_ref() => {
                        debug!(target = ?self.target, "content hash unchanged, still waiting");
                        continue;
                    }
                    Ok(current) => self.baseline = Some(current),
                    // Mid-replace; the following create event will be checked.
                    Err(err) => {
                        debug!(target = ?self.target, error = %err, "could not hash file, still waiting");
                        continue;
                    }
                }
            }

            return Ok(());
        }
    }
}

/// Single-shot [`BlockingTrigger`] over a fresh [`FileWatch`].
///
/// - `hash_gated(true)`: ignore events that leave the content unchanged.
/// - `timeout(d)`: give up with [`IniError::Trigger`] after `d`.
///
/// For repeated reloads keep one [`FileWatch`] alive instead, so edits made
/// while a reload is running are not missed.
#[derive(Debug, Clone, Default)]
pub struct FileChangeTrigger {
    hash_gated: bool,
    timeout: Option<Duration>,
}

impl FileChangeTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hash_gated(mut self, enabled: bool) -> Self {
        self.hash_gated = enabled;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl BlockingTrigger for FileChangeTrigger {
    fn block_until_triggered(self, path: &Path) -> Result<()> {
        FileWatch::new(path, self.hash_gated)?.wait(self.timeout)
    }
}

/// Absolute path of the file, with its parent directory canonicalised so it
/// compares equal to the paths `notify` reports.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    let Some(file_name) = path.file_name() else {
        return Err(IniError::Trigger(format!("{:?} does not name a file", path)));
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let parent = parent.canonicalize().map_err(|source| IniError::Io {
        path: parent.clone(),
        source,
    })?;
    Ok(parent.join(file_name))
}

fn is_content_event(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) | EventKind::Any
    )
}

fn watcher_gone(target: &Path) -> IniError {
    IniError::Trigger(format!("file watcher for {:?} stopped unexpectedly", target))
}
