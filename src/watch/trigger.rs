// src/watch/trigger.rs

use std::path::Path;
use std::sync::mpsc;

use crate::errors::{IniError, Result};

/// Something that blocks the calling thread until an external condition is
/// satisfied, then returns. Single shot: the trigger is consumed.
///
/// The reload functions in [`crate::watch`] call this exactly once before
/// re-reading the file. How the condition is detected (a filesystem event,
/// a message, a timer) is entirely up to the implementation.
pub trait BlockingTrigger {
    fn block_until_triggered(self, path: &Path) -> Result<()>;
}

/// Adapts any `FnOnce(&Path)` into a [`BlockingTrigger`].
///
/// ```
/// use iniwatch::watch::TriggerFn;
///
/// let trigger = TriggerFn::new(|path| {
///     println!("pretending {} changed", path.display());
/// });
/// # let _ = trigger;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TriggerFn<F>(pub F);

impl<F> TriggerFn<F>
where
    F: FnOnce(&Path),
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> BlockingTrigger for TriggerFn<F>
where
    F: FnOnce(&Path),
{
    fn block_until_triggered(self, path: &Path) -> Result<()> {
        (self.0)(path);
        Ok(())
    }
}

/// Fires when a message arrives on a channel.
///
/// If every sender is dropped without sending, the trigger fails instead of
/// blocking forever.
#[derive(Debug)]
pub struct ChannelTrigger {
    rx: mpsc::Receiver<()>,
}

impl ChannelTrigger {
    pub fn new(rx: mpsc::Receiver<()>) -> Self {
        Self { rx }
    }

    /// Create a connected sender/trigger pair.
    pub fn pair() -> (mpsc::Sender<()>, Self) {
        let (tx, rx) = mpsc::channel();
        (tx, Self::new(rx))
    }
}

impl BlockingTrigger for ChannelTrigger {
    fn block_until_triggered(self, path: &Path) -> Result<()> {
        self.rx.recv().map_err(|_| {
            IniError::Trigger(format!(
                "notification channel for {:?} closed before firing",
                path
            ))
        })
    }
}
