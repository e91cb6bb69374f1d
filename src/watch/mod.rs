// src/watch/mod.rs

//! Reloading a file after an external change notification.
//!
//! This module is responsible for:
//! - The `BlockingTrigger` abstraction and a couple of ready-made triggers.
//! - The reload functions: wait for a trigger once, then load and parse.
//! - A `notify`-backed trigger (optionally gated on content hashes) for
//!   callers that want to react to edits on disk.
//!
//! The reload functions never watch anything themselves; the trigger is the
//! caller's choice.

pub mod file_change;
pub mod hash;
pub mod reload;
pub mod trigger;

pub use file_change::{FileChangeTrigger, FileWatch};
pub use hash::compute_file_hash;
pub use reload::{watch, watch_async, watch_on_thread, watch_with};
pub use trigger::{BlockingTrigger, ChannelTrigger, TriggerFn};
