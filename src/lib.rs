// src/lib.rs

//! Parse simple INI files (sections, `key = value`, comments, an implicit
//! default section) and re-read them after an external change notification.
//!
//! ```no_run
//! let cfg = iniwatch::load("config.ini")?;
//! for name in cfg.section_names() {
//!     println!("[{name}]");
//! }
//! # Ok::<(), iniwatch::errors::IniError>(())
//! ```

pub mod cli;
pub mod errors;
pub mod fs;
pub mod ini;
pub mod logging;
pub mod watch;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::cli::{CliArgs, OutputFormat};
use crate::ini::{Config, ParseOptions, load_with};
use crate::watch::FileWatch;

pub use crate::errors::IniError;
pub use crate::ini::{DEFAULT_SECTION, Parser, Section, load, parse};
pub use crate::watch::{BlockingTrigger, watch};

/// High-level entry point used by `main.rs`.
///
/// Loads the file once and prints it. With `--watch`, keeps waiting for
/// changes and reprints after each reload until Ctrl-C.
pub async fn run(args: CliArgs) -> Result<()> {
    let options = args.parse_options();
    options.validate()?;
    let path = PathBuf::from(&args.file);

    // Registered before the first load so edits made while it runs are queued.
    let watch = if args.watch {
        Some(FileWatch::new(&path, args.use_hash)?)
    } else {
        None
    };

    let cfg = load_with(&path, &options)
        .with_context(|| format!("loading {:?}", path))?;
    println!("{}", render(&cfg, &args, &options)?);

    let Some(mut watch) = watch else {
        return Ok(());
    };

    let (reload_tx, mut reload_rx) = mpsc::unbounded_channel();
    {
        let options = options.clone();
        // Detached so that Ctrl-C does not have to wait for the next change.
        std::thread::Builder::new()
            .name("iniwatch-reload".to_string())
            .spawn(move || {
                loop {
                    let reloaded = watch
                        .wait(None)
                        .and_then(|()| load_with(&path, &options));
                    let stop = matches!(reloaded, Err(IniError::Trigger(_) | IniError::Notify(_)));
                    if reload_tx.send(reloaded).is_err() || stop {
                        break;
                    }
                }
            })?;
    }

    loop {
        tokio::select! {
            reloaded = reload_rx.recv() => {
                match reloaded.ok_or_else(|| anyhow!("reload loop stopped"))? {
                    Ok(cfg) => match render(&cfg, &args, &options) {
                        Ok(out) => println!("{out}"),
                        Err(err) => warn!(error = %err, "could not render reloaded file"),
                    },
                    // A broken edit should not end the session.
                    Err(err) if err.is_parse_error() => {
                        warn!(error = %err, "reload failed, keeping previous output");
                    }
                    Err(IniError::Io { path, source }) => {
                        warn!(?path, error = %source, "reload failed, waiting for next change");
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted, stopping");
                return Ok(());
            }
        }
    }
}

/// Render `cfg` in the requested output format.
pub fn render(cfg: &Config, args: &CliArgs, options: &ParseOptions) -> Result<String> {
    match args.format {
        OutputFormat::List => render_list(cfg, args.section.as_deref(), options),
        OutputFormat::Toml => match args.section.as_deref() {
            Some(name) => {
                let section = cfg
                    .section(name)
                    .ok_or_else(|| anyhow!("no section named {name:?}"))?;
                Ok(toml::to_string(section)?)
            }
            None => Ok(toml::to_string(cfg)?),
        },
    }
}

/// `section.key = value` lines in section order, keys sorted, joined with
/// the configured line terminator.
pub fn render_list(cfg: &Config, only: Option<&str>, options: &ParseOptions) -> Result<String> {
    if let Some(name) = only {
        if !cfg.contains_section(name) {
            return Err(anyhow!("no section named {name:?}"));
        }
    }

    let lines: Vec<String> = cfg
        .sections()
        .filter(|(name, _)| only.is_none_or(|wanted| wanted == *name))
        .flat_map(|(name, section)| {
            section
                .iter()
                .map(move |(key, value)| format!("{name}.{key} = {value}"))
        })
        .collect();

    Ok(lines.join(options.line_terminator.as_str()))
}
