// src/logging.rs

//! Logging setup for the `iniwatch` binary.
//!
//! The filter comes from, in order:
//! 1. `--log-level` (applies to every target),
//! 2. `INIWATCH_LOG`, which takes full `EnvFilter` directives such as
//!    `iniwatch::watch=debug,info`,
//! 3. `info`.
//!
//! Logs go to STDERR; STDOUT carries the listing only.

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

pub const LOG_ENV_VAR: &str = "INIWATCH_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Initialise the global logging subscriber. Call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env = std::env::var(LOG_ENV_VAR).ok();
    let directive = filter_directive(cli_level, env.as_deref());

    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("invalid {LOG_ENV_VAR} filter {directive:?}"))?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))?;

    Ok(())
}

/// The filter directive `init_logging` installs for the given inputs.
pub fn filter_directive(cli_level: Option<LogLevel>, env: Option<&str>) -> String {
    if let Some(value) = cli_level.and_then(|lvl| lvl.to_possible_value()) {
        return value.get_name().to_string();
    }
    match env.map(str::trim) {
        Some(directives) if !directives.is_empty() => directives.to_string(),
        _ => DEFAULT_DIRECTIVE.to_string(),
    }
}
