// src/watch/reload.rs

//! Re-read a file once a caller-supplied trigger fires.
//!
//! None of these functions watch anything themselves. No debouncing and no
//! retries happen here; a failed load is returned to the caller as-is.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::thread;

use tracing::info;

use crate::errors::{IniError, Result};
use crate::ini::{Config, ParseOptions, load_with};
use crate::watch::trigger::BlockingTrigger;

/// Block on `trigger`, then load `path` with the platform default options.
pub fn watch<T: BlockingTrigger>(path: impl AsRef<Path>, trigger: T) -> Result<Config> {
    watch_with(path, trigger, ParseOptions::platform())
}

/// Block on `trigger`, then load `path` with explicit options.
pub fn watch_with<T: BlockingTrigger>(
    path: impl AsRef<Path>,
    trigger: T,
    options: &ParseOptions,
) -> Result<Config> {
    let path = path.as_ref();
    info!(?path, "waiting for reload trigger");
    trigger.block_until_triggered(path)?;
    info!(?path, "reload triggered, loading");
    load_with(path, options)
}

/// Like [`watch_with`], but the trigger runs on a dedicated thread.
///
/// The calling thread joins that thread before loading, so the observable
/// behaviour is the same as a direct call. A panic inside the trigger is
/// re-raised here.
pub fn watch_on_thread<T>(
    path: impl AsRef<Path>,
    trigger: T,
    options: &ParseOptions,
) -> Result<Config>
where
    T: BlockingTrigger + Send + 'static,
{
    let path = path.as_ref().to_path_buf();

    info!(?path, "waiting for reload trigger on a dedicated thread");
    let handle = thread::Builder::new()
        .name("iniwatch-trigger".to_string())
        .spawn({
            let path = path.clone();
            move || trigger.block_until_triggered(&path)
        })
        .map_err(|e| IniError::Trigger(format!("spawning trigger thread: {e}")))?;

    match handle.join() {
        Ok(result) => result?,
        Err(panic) => std::panic::resume_unwind(panic),
    }

    info!(?path, "reload triggered, loading");
    load_with(&path, options)
}

/// Async flavour: await `trigger`, then load on tokio's blocking pool.
pub async fn watch_async<F>(
    path: impl Into<PathBuf>,
    trigger: F,
    options: ParseOptions,
) -> Result<Config>
where
    F: Future<Output = ()>,
{
    let path = path.into();
    info!(?path, "waiting for reload trigger");
    trigger.await;
    info!(?path, "reload triggered, loading");

    match tokio::task::spawn_blocking(move || load_with(&path, &options)).await {
        Ok(result) => result,
        Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
        Err(err) => Err(IniError::Trigger(format!("reload task failed: {err}"))),
    }
}
